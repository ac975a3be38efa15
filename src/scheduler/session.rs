//! The scheduling session.
//!
//! A session owns the mutable timetable state: entries, room assignments,
//! and both derived conflict streams. The caller owns the session and
//! passes it, together with a read-only [`Registry`] snapshot, into every
//! operation — there is no hidden global state. Conflicts are recomputed
//! wholesale after every mutation, so reports are always correct relative
//! to the current collections.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Conflict, RoomAssignment, RoomConflict, Slot, TimetableEntry};
use crate::registry::Registry;
use crate::rooms::{self, RoomSuggestion, RoomUtilization};

use super::constraints::validate_constraints;
use super::progress::{self, SubjectProgress};
use super::ViewMode;

/// Mutable timetable state for one editing session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulingSession {
    entries: Vec<TimetableEntry>,
    room_assignments: Vec<RoomAssignment>,
    conflicts: Vec<Conflict>,
    room_conflicts: Vec<RoomConflict>,
}

impl SchedulingSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// All timetable entries, in insertion order.
    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    /// All room assignments, in insertion order.
    pub fn room_assignments(&self) -> &[RoomAssignment] {
        &self.room_assignments
    }

    /// Schedule-level conflicts from the last recomputation.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Room-level conflicts from the last recomputation.
    pub fn room_conflicts(&self) -> &[RoomConflict] {
        &self.room_conflicts
    }

    /// Looks up an entry by id.
    pub fn entry(&self, entry_id: &str) -> Option<&TimetableEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    /// The active room assignment for an entry, if any.
    pub fn assignment_for_entry(&self, entry_id: &str) -> Option<&RoomAssignment> {
        self.room_assignments.iter().find(|a| a.entry_id == entry_id)
    }

    /// Whether any current conflict (either stream) is error severity.
    ///
    /// Publishing is expected to be gated on this, though the engine
    /// itself never blocks.
    pub fn has_blocking_conflicts(&self) -> bool {
        self.conflicts.iter().any(|c| c.severity.is_error())
            || self.room_conflicts.iter().any(|c| c.severity.is_error())
    }

    /// Per-subject scheduled-vs-required progress for a class or teacher.
    pub fn subject_progress(
        &self,
        registry: &Registry,
        view_mode: ViewMode,
        entity_id: &str,
    ) -> HashMap<String, SubjectProgress> {
        progress::subject_progress(&self.entries, registry, view_mode, entity_id)
    }

    /// Grid cells still offerable for a subject.
    pub fn valid_slots(
        &self,
        registry: &Registry,
        subject_id: &str,
        view_mode: ViewMode,
        entity_id: &str,
    ) -> Vec<Slot> {
        progress::valid_slots(&self.entries, registry, subject_id, view_mode, entity_id)
    }

    /// Places a lesson at (day, period).
    ///
    /// The subject must still need hours ([`EngineError::AllocationFulfilled`]
    /// otherwise) and an active teaching assignment must resolve the
    /// (class, teacher) pair ([`EngineError::NoTeacherAssigned`]). The slot
    /// must exist in the registry. Conflicts are recomputed on success;
    /// detection never blocks placement.
    pub fn add_entry(
        &mut self,
        registry: &Registry,
        day: &str,
        period: u32,
        subject_id: &str,
        view_mode: ViewMode,
        entity_id: &str,
    ) -> EngineResult<TimetableEntry> {
        let progress = self.subject_progress(registry, view_mode, entity_id);
        if progress.get(subject_id).map(|p| p.is_complete()).unwrap_or(false) {
            return Err(EngineError::AllocationFulfilled {
                subject_id: subject_id.to_string(),
            });
        }

        let (class_id, teacher_id) = self.resolve_pair(registry, subject_id, view_mode, entity_id)?;

        let slot = registry
            .time_slot_at(day, period)
            .ok_or_else(|| EngineError::UnknownTimeSlot {
                day: day.to_string(),
                period,
            })?;

        let entry = TimetableEntry::new(class_id, teacher_id, subject_id, &slot.id, day, period);
        tracing::debug!(
            entry_id = %entry.id,
            class_id = %entry.class_id,
            teacher_id = %entry.teacher_id,
            subject_id,
            "added timetable entry at {day} period {period}"
        );
        self.entries.push(entry.clone());
        self.refresh_conflicts(registry);
        Ok(entry)
    }

    /// Removes an entry and its room assignment unconditionally.
    pub fn remove_entry(&mut self, registry: &Registry, entry_id: &str) {
        self.entries.retain(|e| e.id != entry_id);
        self.room_assignments.retain(|a| a.entry_id != entry_id);
        self.refresh_conflicts(registry);
        tracing::debug!(entry_id, "removed timetable entry");
    }

    /// Ranked room suggestions for one entry.
    ///
    /// Rooms held by other assignments at the entry's slot are excluded
    /// from the candidate pool.
    pub fn score_rooms_for_entry(
        &self,
        registry: &Registry,
        entry_id: &str,
    ) -> EngineResult<Vec<RoomSuggestion>> {
        let entry = self.entry(entry_id).ok_or_else(|| EngineError::UnknownEntity {
            entity: "timetable entry",
            id: entry_id.to_string(),
        })?;
        let others: Vec<RoomAssignment> = self
            .room_assignments
            .iter()
            .filter(|a| a.entry_id != entry_id)
            .cloned()
            .collect();
        let occupied = rooms::occupied_rooms_at(&others, &self.entries, &entry.day, entry.period);
        Ok(rooms::score_rooms(entry, registry, &occupied))
    }

    /// Runs the greedy auto-assignment pass over every unassigned entry.
    ///
    /// Returns the newly created assignments; entries with no positive
    /// candidate stay unassigned. Room conflicts are recomputed after the
    /// pass.
    pub fn auto_assign_rooms(&mut self, registry: &Registry) -> Vec<RoomAssignment> {
        let created = rooms::auto_assign_rooms(&self.entries, &self.room_assignments, registry);
        tracing::info!(assigned = created.len(), "auto-assignment pass finished");
        self.room_assignments.extend(created.iter().cloned());
        self.refresh_conflicts(registry);
        created
    }

    /// Manually binds a room to an entry, replacing any prior assignment.
    ///
    /// Fails with [`EngineError::RoomOccupied`] when another assignment
    /// holds the room at the entry's slot.
    pub fn assign_room_manually(
        &mut self,
        registry: &Registry,
        entry_id: &str,
        room_id: &str,
    ) -> EngineResult<RoomAssignment> {
        let assignment = rooms::assign_room_manually(
            &self.entries,
            &mut self.room_assignments,
            registry,
            entry_id,
            room_id,
        )?;
        self.refresh_conflicts(registry);
        Ok(assignment)
    }

    /// Per-room utilization over the current assignments.
    pub fn room_utilization(&self, registry: &Registry) -> Vec<RoomUtilization> {
        RoomUtilization::calculate(
            &registry.rooms,
            &self.room_assignments,
            &self.entries,
            &self.room_conflicts,
            &registry.grid,
        )
    }

    /// Clears the timetable: entries, assignments, and both conflict
    /// streams are dropped.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.room_assignments.clear();
        self.conflicts.clear();
        self.room_conflicts.clear();
    }

    fn resolve_pair(
        &self,
        registry: &Registry,
        subject_id: &str,
        view_mode: ViewMode,
        entity_id: &str,
    ) -> EngineResult<(String, String)> {
        match view_mode {
            ViewMode::Class => {
                if registry.class_section(entity_id).is_none() {
                    return Err(EngineError::UnknownEntity {
                        entity: "class",
                        id: entity_id.to_string(),
                    });
                }
                let binding = registry
                    .teaching
                    .active_for(entity_id, subject_id)
                    .ok_or_else(|| EngineError::NoTeacherAssigned {
                        entity: "class",
                        entity_id: entity_id.to_string(),
                        subject_id: subject_id.to_string(),
                    })?;
                Ok((entity_id.to_string(), binding.teacher_id.clone()))
            }
            ViewMode::Teacher => {
                if registry.teacher(entity_id).is_none() {
                    return Err(EngineError::UnknownEntity {
                        entity: "teacher",
                        id: entity_id.to_string(),
                    });
                }
                // First active binding in table order supplies the class.
                let binding = registry
                    .teaching
                    .iter()
                    .find(|a| {
                        a.is_active && a.teacher_id == entity_id && a.subject_id == subject_id
                    })
                    .ok_or_else(|| EngineError::NoTeacherAssigned {
                        entity: "teacher",
                        entity_id: entity_id.to_string(),
                        subject_id: subject_id.to_string(),
                    })?;
                Ok((binding.class_id.clone(), entity_id.to_string()))
            }
        }
    }

    fn refresh_conflicts(&mut self, registry: &Registry) {
        self.conflicts = validate_constraints(&self.entries, registry);
        self.room_conflicts =
            rooms::detect_room_conflicts(&self.room_assignments, &self.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ClassSection, Classroom, ConflictKind, ConflictStatus, Grade, GradeSubjectAllocation,
        GridConfig, Teacher, TimeSlot,
    };

    /// Two days × three periods, 45-minute lessons, fully slotted.
    fn make_registry() -> Registry {
        let mut registry = Registry::new()
            .with_grade(Grade::new("G7", 7))
            .with_class_section(ClassSection::new("C1", "G7", 28))
            .with_class_section(ClassSection::new("C2", "G7", 30))
            .with_teacher(
                Teacher::new("T1", "t1@school.example")
                    .with_subject("MATH")
                    .with_subject("PE")
                    .with_hour_limit(20.0),
            )
            .with_room(Classroom::new("R1", "A101", "STD", 32))
            .with_room(Classroom::new("R2", "A102", "STD", 32))
            .with_grid(GridConfig::new(
                vec!["Monday".into(), "Tuesday".into()],
                3,
                45,
            ));
        for (day_idx, day) in ["Monday", "Tuesday"].iter().enumerate() {
            for period in 1..=3u32 {
                let id = format!("TS{}{period}", day_idx + 1);
                let start = format!("{:02}:00", 7 + period);
                let end = format!("{:02}:45", 7 + period);
                registry = registry.with_time_slot(TimeSlot::new(id, *day, period, start, end));
            }
        }
        registry
            .allocations
            .upsert(GradeSubjectAllocation::new("G7", "MATH", 1.5, 18));
        registry
            .allocations
            .upsert(GradeSubjectAllocation::new("G7", "PE", 0.75, 18));
        registry.teaching.assign("C1", "MATH", "T1");
        registry.teaching.assign("C1", "PE", "T1");
        registry.teaching.assign("C2", "MATH", "T1");
        registry
    }

    #[test]
    fn test_add_entry_resolves_teacher_in_class_mode() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        let entry = session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap();
        assert_eq!(entry.class_id, "C1");
        assert_eq!(entry.teacher_id, "T1");
        assert_eq!(entry.time_slot_id, "TS11");
        assert_eq!(session.entries().len(), 1);
        assert!(session.conflicts().is_empty());
    }

    #[test]
    fn test_add_entry_resolves_class_in_teacher_mode() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        let entry = session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Teacher, "T1")
            .unwrap();
        // First active binding for (T1, MATH) is C1.
        assert_eq!(entry.class_id, "C1");
        assert_eq!(entry.teacher_id, "T1");
    }

    #[test]
    fn test_add_entry_without_teacher_binding_fails() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        // C2 has MATH but no PE binding.
        let err = session
            .add_entry(&registry, "Monday", 1, "PE", ViewMode::Class, "C2")
            .unwrap_err();
        assert!(matches!(err, EngineError::NoTeacherAssigned { .. }));
        assert!(session.entries().is_empty());
    }

    #[test]
    fn test_add_entry_unknown_slot_fails() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        let err = session
            .add_entry(&registry, "Sunday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownTimeSlot {
                day: "Sunday".into(),
                period: 1,
            }
        );
    }

    #[test]
    fn test_progress_caps_placement() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        // MATH requires 1.5h = two 45-minute periods.
        session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap();
        session
            .add_entry(&registry, "Monday", 2, "MATH", ViewMode::Class, "C1")
            .unwrap();

        let progress = session.subject_progress(&registry, ViewMode::Class, "C1");
        assert_eq!(progress["MATH"].percentage, 100);

        // Valid slots dry up and further placement is rejected.
        assert!(session
            .valid_slots(&registry, "MATH", ViewMode::Class, "C1")
            .is_empty());
        let err = session
            .add_entry(&registry, "Tuesday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::AllocationFulfilled {
                subject_id: "MATH".into(),
            }
        );
    }

    #[test]
    fn test_remove_entry_reopens_slot() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        let entry = session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap();
        session
            .add_entry(&registry, "Monday", 2, "MATH", ViewMode::Class, "C1")
            .unwrap();
        assert!(session
            .valid_slots(&registry, "MATH", ViewMode::Class, "C1")
            .is_empty());

        session.remove_entry(&registry, &entry.id);
        assert_eq!(session.entries().len(), 1);
        let slots = session.valid_slots(&registry, "MATH", ViewMode::Class, "C1");
        assert!(slots.contains(&Slot::new("Monday", 1)));
    }

    #[test]
    fn test_remove_entry_drops_room_assignment() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        let entry = session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap();
        session.auto_assign_rooms(&registry);
        assert!(session.assignment_for_entry(&entry.id).is_some());

        session.remove_entry(&registry, &entry.id);
        assert!(session.assignment_for_entry(&entry.id).is_none());
    }

    #[test]
    fn test_conflicts_recomputed_on_mutation() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        // Same teacher, same slot, through two different classes.
        session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap();
        let second = session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C2")
            .unwrap();

        let bookings: Vec<_> = session
            .conflicts()
            .iter()
            .filter(|c| matches!(&c.kind, ConflictKind::TeacherDoubleBooking { .. }))
            .collect();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].entry_ids, vec![second.id.clone()]);
        assert!(session.has_blocking_conflicts());

        session.remove_entry(&registry, &second.id);
        assert!(session.conflicts().is_empty());
        assert!(!session.has_blocking_conflicts());
    }

    #[test]
    fn test_auto_assign_and_manual_override() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        let entry = session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap();
        let created = session.auto_assign_rooms(&registry);
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].room_id, "R1");
        assert_eq!(created[0].conflict_status, ConflictStatus::None);

        let manual = session
            .assign_room_manually(&registry, &entry.id, "R2")
            .unwrap();
        assert_eq!(session.room_assignments().len(), 1);
        assert_eq!(session.assignment_for_entry(&entry.id).unwrap().id, manual.id);
        assert!(!manual.is_auto_assigned);
    }

    #[test]
    fn test_manual_assign_occupied_room_fails() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        let first = session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap();
        let second = session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C2")
            .unwrap();
        session
            .assign_room_manually(&registry, &first.id, "R1")
            .unwrap();

        let err = session
            .assign_room_manually(&registry, &second.id, "R1")
            .unwrap_err();
        assert!(matches!(err, EngineError::RoomOccupied { .. }));
    }

    #[test]
    fn test_score_rooms_excludes_occupied() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        let first = session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap();
        let second = session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C2")
            .unwrap();
        session
            .assign_room_manually(&registry, &first.id, "R1")
            .unwrap();

        let suggestions = session.score_rooms_for_entry(&registry, &second.id).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].room_id, "R2");
    }

    #[test]
    fn test_room_utilization_reflects_assignments() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap();
        session.auto_assign_rooms(&registry);

        let utilization = session.room_utilization(&registry);
        assert_eq!(utilization.len(), 2);
        let r1 = utilization.iter().find(|u| u.room_id == "R1").unwrap();
        assert_eq!(r1.occupied_slots, 1);
        assert_eq!(r1.total_slots, 6);
        assert_eq!(r1.utilization_percentage, 17);
    }

    #[test]
    fn test_clear_drops_everything() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();

        session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap();
        session.auto_assign_rooms(&registry);
        session.clear();

        assert!(session.entries().is_empty());
        assert!(session.room_assignments().is_empty());
        assert!(session.conflicts().is_empty());
        assert!(session.room_conflicts().is_empty());
    }

    #[test]
    fn test_session_survives_serde_round_trip() {
        let registry = make_registry();
        let mut session = SchedulingSession::new();
        session
            .add_entry(&registry, "Monday", 1, "MATH", ViewMode::Class, "C1")
            .unwrap();
        session.auto_assign_rooms(&registry);

        let json = serde_json::to_string(&session).unwrap();
        let restored: SchedulingSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.entries().len(), 1);
        assert_eq!(restored.room_assignments().len(), 1);
    }
}
