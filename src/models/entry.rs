//! Timetable entries and room assignments.
//!
//! An entry is one scheduled lesson occupying a single (class, day, period)
//! cell. Room assignments bind entries to rooms in a separate layer, so a
//! lesson can be scheduled before a room is chosen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One scheduled lesson.
///
/// Day and period are denormalized from the referenced time slot for
/// cheap grid queries; they must always match it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Unique entry identifier.
    pub id: String,
    /// Class receiving the lesson.
    pub class_id: String,
    /// Teacher giving the lesson.
    pub teacher_id: String,
    /// Subject taught.
    pub subject_id: String,
    /// Room recorded directly on the entry, if any.
    pub room_id: Option<String>,
    /// Referenced time slot.
    pub time_slot_id: String,
    /// Weekday name (denormalized).
    pub day: String,
    /// Period number (denormalized).
    pub period: u32,
}

impl TimetableEntry {
    /// Creates an entry with a fresh id.
    pub fn new(
        class_id: impl Into<String>,
        teacher_id: impl Into<String>,
        subject_id: impl Into<String>,
        time_slot_id: impl Into<String>,
        day: impl Into<String>,
        period: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            class_id: class_id.into(),
            teacher_id: teacher_id.into(),
            subject_id: subject_id.into(),
            room_id: None,
            time_slot_id: time_slot_id.into(),
            day: day.into(),
            period,
        }
    }

    /// Overrides the generated id (fixtures and imports).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Records a room directly on the entry.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Whether the entry occupies the given grid cell.
    pub fn occupies(&self, day: &str, period: u32) -> bool {
        self.day == day && self.period == period
    }
}

/// Who created a room assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignedBy {
    /// The greedy auto-assignment pass.
    System,
    /// A user acting through the UI.
    User,
}

/// Conflict status carried on a room assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictStatus {
    /// No known issue.
    None,
    /// Assigned with scorer warnings (e.g., capacity shortfall).
    Warning,
    /// Assigned into a detected conflict.
    Error,
}

/// A room bound to a timetable entry.
///
/// At most one active assignment exists per entry; replacing a room is
/// remove-then-insert, never an in-place edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomAssignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Entry receiving the room.
    pub entry_id: String,
    /// Assigned room.
    pub room_id: String,
    /// Whether the greedy pass created this assignment.
    pub is_auto_assigned: bool,
    /// Creation timestamp.
    pub assigned_at: DateTime<Utc>,
    /// Originator.
    pub assigned_by: AssignedBy,
    /// Status at assignment time.
    pub conflict_status: ConflictStatus,
}

impl RoomAssignment {
    /// Creates an assignment from the greedy auto-assignment pass.
    pub fn auto(
        entry_id: impl Into<String>,
        room_id: impl Into<String>,
        conflict_status: ConflictStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            entry_id: entry_id.into(),
            room_id: room_id.into(),
            is_auto_assigned: true,
            assigned_at: Utc::now(),
            assigned_by: AssignedBy::System,
            conflict_status,
        }
    }

    /// Creates a user-made assignment.
    pub fn manual(entry_id: impl Into<String>, room_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            entry_id: entry_id.into(),
            room_id: room_id.into(),
            is_auto_assigned: false,
            assigned_at: Utc::now(),
            assigned_by: AssignedBy::User,
            conflict_status: ConflictStatus::None,
        }
    }
}
