//! Read-only reference-data registry.
//!
//! Bundles the lookup tables every engine operation needs: entities, the
//! allocation ledger, the teaching assignment table, and the grid shape.
//! The caller supplies it as a snapshot before each operation; the engine
//! never mutates it.

use serde::{Deserialize, Serialize};

use crate::models::{
    AllocationLedger, ClassSection, Classroom, Grade, GridConfig, RoomPreferences, RoomType,
    Subject, Teacher, TeachingAssignmentTable, TimeSlot,
};

/// Reference-data snapshot consumed by engine operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    /// All subjects.
    pub subjects: Vec<Subject>,
    /// All grades.
    pub grades: Vec<Grade>,
    /// All class sections.
    pub class_sections: Vec<ClassSection>,
    /// All teachers.
    pub teachers: Vec<Teacher>,
    /// All room types.
    pub room_types: Vec<RoomType>,
    /// Room catalog, in suggestion tie-break order.
    pub rooms: Vec<Classroom>,
    /// Subject-room-type preference rows.
    pub preferences: RoomPreferences,
    /// Configured time slots.
    pub time_slots: Vec<TimeSlot>,
    /// Curriculum hour requirements.
    pub allocations: AllocationLedger,
    /// (class, subject) → teacher bindings.
    pub teaching: TeachingAssignmentTable,
    /// Weekly grid shape.
    pub grid: GridConfig,
}

impl Registry {
    /// Creates an empty registry with the default grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a grade.
    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grades.push(grade);
        self
    }

    /// Adds a class section.
    pub fn with_class_section(mut self, class: ClassSection) -> Self {
        self.class_sections.push(class);
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a room type.
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_types.push(room_type);
        self
    }

    /// Adds a classroom.
    pub fn with_room(mut self, room: Classroom) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a time slot.
    pub fn with_time_slot(mut self, slot: TimeSlot) -> Self {
        self.time_slots.push(slot);
        self
    }

    /// Sets the grid shape.
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Looks up a subject by id.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Looks up a grade by id.
    pub fn grade(&self, id: &str) -> Option<&Grade> {
        self.grades.iter().find(|g| g.id == id)
    }

    /// Looks up a class section by id.
    pub fn class_section(&self, id: &str) -> Option<&ClassSection> {
        self.class_sections.iter().find(|c| c.id == id)
    }

    /// Looks up a teacher by id.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Looks up a room type by id.
    pub fn room_type(&self, id: &str) -> Option<&RoomType> {
        self.room_types.iter().find(|rt| rt.id == id)
    }

    /// Looks up a classroom by id.
    pub fn room(&self, id: &str) -> Option<&Classroom> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Looks up the time slot at a (day, period) coordinate.
    pub fn time_slot_at(&self, day: &str, period: u32) -> Option<&TimeSlot> {
        self.time_slots
            .iter()
            .find(|ts| ts.day == day && ts.period == period)
    }

    /// Active rooms, in catalog order.
    pub fn active_rooms(&self) -> Vec<&Classroom> {
        self.rooms.iter().filter(|r| r.is_active).collect()
    }
}
