//! Reference-data integrity validation.
//!
//! Checks the structural integrity of the registry before (or while)
//! scheduling. Detects:
//! - Duplicate ids, codes, and emails
//! - Classrooms referencing missing room types
//! - Dangling references (class → grade, allocation → grade/subject,
//!   teaching assignment → class/subject/teacher, preference → subject/type)
//! - Time slots with inverted or duplicate (day, period) coordinates
//!
//! All findings are advisory conflicts; validation never fails and the
//! engine keeps operating on flawed data.

use std::collections::HashSet;

use crate::models::Conflict;
use crate::registry::Registry;

/// Validates the registry and returns every detected integrity conflict.
///
/// Pure: identical input yields identical output, and repeated calls do
/// not accumulate state.
pub fn validate_registry(registry: &Registry) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    check_subjects(registry, &mut conflicts);
    check_grades(registry, &mut conflicts);
    check_class_sections(registry, &mut conflicts);
    check_teachers(registry, &mut conflicts);
    check_rooms(registry, &mut conflicts);
    check_time_slots(registry, &mut conflicts);
    check_allocations(registry, &mut conflicts);
    check_teaching_assignments(registry, &mut conflicts);
    check_preferences(registry, &mut conflicts);

    conflicts
}

fn check_subjects(registry: &Registry, conflicts: &mut Vec<Conflict>) {
    let mut ids = HashSet::new();
    let mut codes = HashSet::new();
    for subject in &registry.subjects {
        if !ids.insert(subject.id.as_str()) {
            conflicts.push(Conflict::duplicate_key("subject id", &subject.id));
        }
        if !codes.insert(subject.code.as_str()) {
            conflicts.push(Conflict::duplicate_key("subject code", &subject.code));
        }
        if !subject.has_valid_code() {
            conflicts.push(Conflict::malformed_code("Subject", &subject.id, &subject.code));
        }
    }
}

fn check_grades(registry: &Registry, conflicts: &mut Vec<Conflict>) {
    let mut ids = HashSet::new();
    for grade in &registry.grades {
        if !ids.insert(grade.id.as_str()) {
            conflicts.push(Conflict::duplicate_key("grade id", &grade.id));
        }
    }
}

fn check_class_sections(registry: &Registry, conflicts: &mut Vec<Conflict>) {
    let mut ids = HashSet::new();
    for class in &registry.class_sections {
        if !ids.insert(class.id.as_str()) {
            conflicts.push(Conflict::duplicate_key("class id", &class.id));
        }
        if registry.grade(&class.grade_id).is_none() {
            conflicts.push(Conflict::dangling_reference(
                "Class",
                &class.id,
                format!("grade '{}'", class.grade_id),
            ));
        }
    }
}

fn check_teachers(registry: &Registry, conflicts: &mut Vec<Conflict>) {
    let mut ids = HashSet::new();
    let mut emails = HashSet::new();
    for teacher in &registry.teachers {
        if !ids.insert(teacher.id.as_str()) {
            conflicts.push(Conflict::duplicate_key("teacher id", &teacher.id));
        }
        if !emails.insert(teacher.email.as_str()) {
            conflicts.push(Conflict::duplicate_key("teacher email", &teacher.email));
        }
        for subject_id in &teacher.subject_ids {
            if registry.subject(subject_id).is_none() {
                conflicts.push(Conflict::dangling_reference(
                    "Teacher",
                    &teacher.id,
                    format!("subject '{subject_id}'"),
                ));
            }
        }
    }
}

fn check_rooms(registry: &Registry, conflicts: &mut Vec<Conflict>) {
    let mut type_ids = HashSet::new();
    for room_type in &registry.room_types {
        if !type_ids.insert(room_type.id.as_str()) {
            conflicts.push(Conflict::duplicate_key("room type id", &room_type.id));
        }
    }

    let mut ids = HashSet::new();
    let mut codes = HashSet::new();
    for room in &registry.rooms {
        if !ids.insert(room.id.as_str()) {
            conflicts.push(Conflict::duplicate_key("room id", &room.id));
        }
        if !codes.insert(room.code.as_str()) {
            conflicts.push(Conflict::duplicate_key("room code", &room.code));
        }
        if registry.room_type(&room.room_type_id).is_none() {
            conflicts.push(Conflict::missing_room_type(&room.id, &room.room_type_id));
        }
    }
}

fn check_time_slots(registry: &Registry, conflicts: &mut Vec<Conflict>) {
    let mut ids = HashSet::new();
    let mut coordinates = HashSet::new();
    for slot in &registry.time_slots {
        if !ids.insert(slot.id.as_str()) {
            conflicts.push(Conflict::duplicate_key("time slot id", &slot.id));
        }
        if !coordinates.insert((slot.day.as_str(), slot.period)) {
            conflicts.push(Conflict::duplicate_key(
                "time slot coordinate",
                format!("{} period {}", slot.day, slot.period),
            ));
        }
        if !slot.has_valid_range() {
            conflicts.push(Conflict::invalid_time_range(&slot.id));
        }
    }
}

fn check_allocations(registry: &Registry, conflicts: &mut Vec<Conflict>) {
    for allocation in registry.allocations.iter() {
        let label = format!("{}/{}", allocation.grade_id, allocation.subject_id);
        if registry.grade(&allocation.grade_id).is_none() {
            conflicts.push(Conflict::dangling_reference(
                "Allocation",
                &label,
                format!("grade '{}'", allocation.grade_id),
            ));
        }
        if registry.subject(&allocation.subject_id).is_none() {
            conflicts.push(Conflict::dangling_reference(
                "Allocation",
                &label,
                format!("subject '{}'", allocation.subject_id),
            ));
        }
    }
}

fn check_teaching_assignments(registry: &Registry, conflicts: &mut Vec<Conflict>) {
    for row in registry.teaching.iter() {
        if !row.is_active {
            continue;
        }
        if registry.class_section(&row.class_id).is_none() {
            conflicts.push(Conflict::dangling_reference(
                "Teaching assignment",
                &row.id,
                format!("class '{}'", row.class_id),
            ));
        }
        if registry.subject(&row.subject_id).is_none() {
            conflicts.push(Conflict::dangling_reference(
                "Teaching assignment",
                &row.id,
                format!("subject '{}'", row.subject_id),
            ));
        }
        if registry.teacher(&row.teacher_id).is_none() {
            conflicts.push(Conflict::dangling_reference(
                "Teaching assignment",
                &row.id,
                format!("teacher '{}'", row.teacher_id),
            ));
        }
    }
}

fn check_preferences(registry: &Registry, conflicts: &mut Vec<Conflict>) {
    for preference in registry.preferences.iter() {
        let label = format!("{}/{}", preference.subject_id, preference.room_type_id);
        if registry.subject(&preference.subject_id).is_none() {
            conflicts.push(Conflict::dangling_reference(
                "Room preference",
                &label,
                format!("subject '{}'", preference.subject_id),
            ));
        }
        if registry.room_type(&preference.room_type_id).is_none() {
            conflicts.push(Conflict::dangling_reference(
                "Room preference",
                &label,
                format!("room type '{}'", preference.room_type_id),
            ));
        }
    }
}
