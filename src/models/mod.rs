//! Timetabling domain models.
//!
//! Core data types for school timetable construction: reference entities
//! (subjects, grades, classes, teachers, rooms), the curriculum allocation
//! ledger, the teaching assignment table, the weekly grid, and the derived
//! conflict types.
//!
//! # Domain Mappings
//!
//! | timetable-engine | School | Resource view |
//! |------------------|--------|---------------|
//! | ClassSection | Student group | Demand |
//! | Teacher | Staff member | Contended resource |
//! | Classroom | Physical room | Contended resource |
//! | TimetableEntry | One lesson | Assignment cell |

mod allocation;
mod assignment;
mod conflict;
mod entry;
mod room;
mod subject;
mod teacher;
mod timeslot;

pub use allocation::{AllocationLedger, GradeSubjectAllocation};
pub use assignment::{TeachingAssignment, TeachingAssignmentTable};
pub use conflict::{
    Conflict, ConflictKind, Impact, Resolution, ResolutionKind, RoomConflict, Severity,
};
pub use entry::{AssignedBy, ConflictStatus, RoomAssignment, TimetableEntry};
pub use room::{Classroom, PreferencePriority, RoomPreference, RoomPreferences, RoomType};
pub use subject::{ClassSection, Grade, Subject};
pub use teacher::Teacher;
pub use timeslot::{GridConfig, Slot, TimeSlot};
