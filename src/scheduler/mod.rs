//! Scheduling engine: session state, progress tracking, and validation.
//!
//! The engine is a deterministic, single-pass, incremental validator —
//! not an optimal solver. Entries are placed and removed one at a time;
//! after every mutation the full conflict set is recomputed from scratch.
//!
//! # Components
//!
//! - [`SchedulingSession`]: mutable timetable state owned by the caller
//! - [`subject_progress`] / [`valid_slots`]: pure curriculum-progress reads
//! - [`validate_constraints`]: schedule-level conflict detection

mod constraints;
mod progress;
mod session;

pub use constraints::validate_constraints;
pub use progress::{subject_progress, valid_slots, SubjectProgress};
pub use session::SchedulingSession;

use serde::{Deserialize, Serialize};

/// Whose timetable an operation addresses.
///
/// Progress, valid slots, and entry placement all work from either the
/// class's or the teacher's point of view; the entity id is interpreted
/// accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// The entity is a class section; subjects come from its grade's
    /// allocations.
    Class,
    /// The entity is a teacher; subjects come from their qualification
    /// set.
    Teacher,
}
