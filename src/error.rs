//! Engine error types.
//!
//! Only the two mutating operations (`add_entry`, `assign_room_manually`)
//! can fail; conflict detection always returns a list and never errors.

use thiserror::Error;

/// Errors raised by engine operations.
///
/// All variants are recoverable: the caller fixes the input (assign a
/// teacher, pick another room or time) and retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// No active teaching assignment resolves the lesson's (class, teacher)
    /// pair for the requested subject.
    #[error("no active teaching assignment for {entity} '{entity_id}' and subject '{subject_id}'")]
    NoTeacherAssigned {
        entity: &'static str,
        entity_id: String,
        subject_id: String,
    },

    /// The requested room is already assigned at this slot.
    #[error("room '{room_id}' is already occupied on {day} period {period}")]
    RoomOccupied {
        room_id: String,
        day: String,
        period: u32,
    },

    /// The subject's weekly allocation is already fully scheduled.
    #[error("weekly allocation for subject '{subject_id}' is already fully scheduled")]
    AllocationFulfilled { subject_id: String },

    /// No time slot is configured for the requested (day, period).
    #[error("no time slot configured for {day} period {period}")]
    UnknownTimeSlot { day: String, period: u32 },

    /// A referenced entity is not present in the registry or session.
    #[error("unknown {entity} '{id}'")]
    UnknownEntity { entity: &'static str, id: String },
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
