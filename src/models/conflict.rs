//! Conflict types.
//!
//! Conflicts are derived, never stored: both streams (schedule-level and
//! room-level) are recomputed wholesale from the current entries and
//! assignments after every mutation. They are advisory — detection never
//! blocks an operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a conflict is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Should be reviewed; publishing is not expected to be blocked.
    Warning,
    /// Must be resolved before the timetable can be published.
    Error,
}

impl Severity {
    /// Whether this severity blocks publishing.
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

/// Classification of schedule-level conflicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// A teacher holds two lessons in the same slot.
    TeacherDoubleBooking {
        teacher_id: String,
        day: String,
        period: u32,
    },
    /// A teacher's scheduled hours exceed their weekly limit.
    TeacherOverload {
        teacher_id: String,
        scheduled_hours: f64,
        limit_hours: f64,
    },
    /// Two entries record the same room in the same slot.
    RoomClash {
        room_id: String,
        day: String,
        period: u32,
    },
    /// A classroom references a room type that does not exist.
    MissingRoomType {
        room_id: String,
        room_type_id: String,
    },
    /// Reference data violates a uniqueness rule (code, email, id).
    DuplicateKey { entity: String, key: String },
    /// Reference data points at an entity that does not exist.
    DanglingReference {
        entity: String,
        id: String,
        target: String,
    },
    /// A time slot's start time is not before its end time.
    InvalidTimeRange { time_slot_id: String },
    /// An entity code does not match the expected shape.
    MalformedCode {
        entity: String,
        id: String,
        code: String,
    },
}

/// A detected schedule-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// What went wrong.
    pub kind: ConflictKind,
    /// Severity of the violation.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Affected timetable entry ids.
    pub entry_ids: Vec<String>,
}

impl Conflict {
    /// A teacher double-booked into one slot. One conflict is emitted per
    /// offending entry beyond the first.
    pub fn teacher_double_booking(
        teacher_id: impl Into<String>,
        day: impl Into<String>,
        period: u32,
        entry_ids: Vec<String>,
    ) -> Self {
        let teacher_id = teacher_id.into();
        let day = day.into();
        Self {
            message: format!("Teacher '{teacher_id}' is double-booked on {day} period {period}"),
            kind: ConflictKind::TeacherDoubleBooking {
                teacher_id,
                day,
                period,
            },
            severity: Severity::Error,
            entry_ids,
        }
    }

    /// A teacher scheduled beyond their weekly hour limit. One conflict is
    /// emitted per teacher, listing all of their entries.
    pub fn teacher_overload(
        teacher_id: impl Into<String>,
        scheduled_hours: f64,
        limit_hours: f64,
        entry_ids: Vec<String>,
    ) -> Self {
        let teacher_id = teacher_id.into();
        Self {
            message: format!(
                "Teacher '{teacher_id}' is scheduled {scheduled_hours:.1}h, above the weekly limit of {limit_hours:.1}h"
            ),
            kind: ConflictKind::TeacherOverload {
                teacher_id,
                scheduled_hours,
                limit_hours,
            },
            severity: Severity::Warning,
            entry_ids,
        }
    }

    /// Two or more entries record the same room in one slot.
    pub fn room_clash(
        room_id: impl Into<String>,
        day: impl Into<String>,
        period: u32,
        entry_ids: Vec<String>,
    ) -> Self {
        let room_id = room_id.into();
        let day = day.into();
        Self {
            message: format!("Room '{room_id}' is used by multiple lessons on {day} period {period}"),
            kind: ConflictKind::RoomClash {
                room_id,
                day,
                period,
            },
            severity: Severity::Error,
            entry_ids,
        }
    }

    /// A classroom references an unknown room type.
    pub fn missing_room_type(room_id: impl Into<String>, room_type_id: impl Into<String>) -> Self {
        let room_id = room_id.into();
        let room_type_id = room_type_id.into();
        Self {
            message: format!("Room '{room_id}' references unknown room type '{room_type_id}'"),
            kind: ConflictKind::MissingRoomType {
                room_id,
                room_type_id,
            },
            severity: Severity::Error,
            entry_ids: Vec::new(),
        }
    }

    /// A uniqueness rule in reference data is violated.
    pub fn duplicate_key(entity: impl Into<String>, key: impl Into<String>) -> Self {
        let entity = entity.into();
        let key = key.into();
        Self {
            message: format!("Duplicate {entity} key: {key}"),
            kind: ConflictKind::DuplicateKey { entity, key },
            severity: Severity::Warning,
            entry_ids: Vec::new(),
        }
    }

    /// Reference data points at a missing entity.
    pub fn dangling_reference(
        entity: impl Into<String>,
        id: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        let entity = entity.into();
        let id = id.into();
        let target = target.into();
        Self {
            message: format!("{entity} '{id}' references missing {target}"),
            kind: ConflictKind::DanglingReference { entity, id, target },
            severity: Severity::Warning,
            entry_ids: Vec::new(),
        }
    }

    /// A time slot with a non-increasing time range.
    pub fn invalid_time_range(time_slot_id: impl Into<String>) -> Self {
        let time_slot_id = time_slot_id.into();
        Self {
            message: format!("Time slot '{time_slot_id}' does not start before it ends"),
            kind: ConflictKind::InvalidTimeRange { time_slot_id },
            severity: Severity::Warning,
            entry_ids: Vec::new(),
        }
    }

    /// A code field violating the expected shape.
    pub fn malformed_code(
        entity: impl Into<String>,
        id: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        let entity = entity.into();
        let id = id.into();
        let code = code.into();
        Self {
            message: format!("{entity} '{id}' has malformed code '{code}'"),
            kind: ConflictKind::MalformedCode { entity, id, code },
            severity: Severity::Warning,
            entry_ids: Vec::new(),
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.severity, self.message)
    }
}

/// Suggested way out of a room conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionKind {
    /// Move one lesson to a different room.
    MoveToRoom,
    /// Move one lesson to a different slot.
    ChangeTime,
}

/// Disruption caused by applying a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// A suggested resolution for a room conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// What to change.
    pub kind: ResolutionKind,
    /// Expected disruption.
    pub impact: Impact,
    /// Human-readable description.
    pub description: String,
}

impl Resolution {
    /// The standard "move one lesson to a different room" suggestion.
    pub fn move_to_room() -> Self {
        Self {
            kind: ResolutionKind::MoveToRoom,
            impact: Impact::Low,
            description: "Move one of the lessons to a different room".to_string(),
        }
    }

    /// The standard "move one lesson to a different time" suggestion.
    pub fn change_time() -> Self {
        Self {
            kind: ResolutionKind::ChangeTime,
            impact: Impact::Medium,
            description: "Move one of the lessons to a different time".to_string(),
        }
    }
}

/// A detected double booking at the room-assignment layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConflict {
    /// Contended room.
    pub room_id: String,
    /// Weekday of the clash.
    pub day: String,
    /// Period of the clash.
    pub period: u32,
    /// All entries assigned into the clash.
    pub entry_ids: Vec<String>,
    /// Always `Error` for double bookings.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Suggested resolutions, cheapest first.
    pub resolutions: Vec<Resolution>,
}

impl RoomConflict {
    /// Creates a double-booking conflict with the standard resolutions.
    pub fn double_booking(
        room_id: impl Into<String>,
        day: impl Into<String>,
        period: u32,
        entry_ids: Vec<String>,
    ) -> Self {
        let room_id = room_id.into();
        let day = day.into();
        Self {
            message: format!(
                "Room '{room_id}' has {} lessons assigned on {day} period {period}",
                entry_ids.len()
            ),
            room_id,
            day,
            period,
            entry_ids,
            severity: Severity::Error,
            resolutions: vec![Resolution::move_to_room(), Resolution::change_time()],
        }
    }

    /// Whether the conflict involves the given room.
    pub fn involves_room(&self, room_id: &str) -> bool {
        self.room_id == room_id
    }
}

impl fmt::Display for RoomConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.severity, self.message)
    }
}
