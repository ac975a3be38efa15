//! Constraint-based school timetable construction core.
//!
//! Provides domain models, conflict validation, curriculum-progress
//! tracking, and greedy room assignment for building weekly school
//! timetables. This crate is the scheduling core only — UI, export, and
//! persistence live with its consumers, which supply reference data as
//! read-only snapshots and own a [`scheduler::SchedulingSession`] per
//! timetable being edited.
//!
//! # Modules
//!
//! - **`models`**: Domain types — subjects, grades, classes, teachers,
//!   rooms, the allocation ledger, the teaching assignment table,
//!   timetable entries, room assignments, and conflict types
//! - **`registry`**: Read-only reference-data snapshot with lookups
//! - **`validation`**: Reference-data integrity checks (duplicate keys,
//!   dangling references, missing room types)
//! - **`scheduler`**: Session state, progress tracking, and schedule-level
//!   conflict detection
//! - **`rooms`**: Suitability rules, the room scorer, greedy
//!   auto-assignment, room-conflict detection, and utilization metrics
//! - **`error`** / **`logging`**: Ambient concerns
//!
//! # Design
//!
//! The engine is deterministic and single-pass: placement is incremental,
//! conflict detection is a full recomputation over current state, and
//! auto-assignment is greedy highest-score-wins with no backtracking.
//! Conflicts are advisory — they are surfaced for the caller to resolve,
//! never silently fixed.

pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
pub mod rooms;
pub mod scheduler;
pub mod validation;
