//! Teaching assignments: (class, subject) → teacher bindings.
//!
//! The table is the source of truth for who may fill a slot. At most one
//! row per (class, subject) is active at a time; reassigning a teacher
//! deactivates the old row instead of deleting it, so the history stays
//! auditable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A (class, subject) → teacher binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeachingAssignment {
    /// Unique row identifier.
    pub id: String,
    /// Class being taught.
    pub class_id: String,
    /// Subject being taught.
    pub subject_id: String,
    /// Teacher bound to the pair.
    pub teacher_id: String,
    /// Whether this row is the active binding.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Deactivation timestamp, set when superseded.
    pub deactivated_at: Option<DateTime<Utc>>,
}

impl TeachingAssignment {
    fn new(
        class_id: impl Into<String>,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            class_id: class_id.into(),
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            is_active: true,
            created_at: Utc::now(),
            deactivated_at: None,
        }
    }
}

/// The teaching assignment table.
///
/// Invariant: at most one active row per (class, subject). `assign`
/// preserves it by soft-deactivating the previous binding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeachingAssignmentTable {
    assignments: Vec<TeachingAssignment>,
}

impl TeachingAssignmentTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a teacher to (class, subject), deactivating any previous
    /// active binding for the pair. Returns the new row.
    pub fn assign(
        &mut self,
        class_id: impl Into<String>,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> TeachingAssignment {
        let class_id = class_id.into();
        let subject_id = subject_id.into();

        for existing in &mut self.assignments {
            if existing.is_active
                && existing.class_id == class_id
                && existing.subject_id == subject_id
            {
                existing.is_active = false;
                existing.deactivated_at = Some(Utc::now());
            }
        }

        let row = TeachingAssignment::new(class_id, subject_id, teacher_id);
        self.assignments.push(row.clone());
        row
    }

    /// The active binding for (class, subject), if any.
    pub fn active_for(&self, class_id: &str, subject_id: &str) -> Option<&TeachingAssignment> {
        self.assignments
            .iter()
            .find(|a| a.is_active && a.class_id == class_id && a.subject_id == subject_id)
    }

    /// All active bindings where the teacher teaches the subject.
    pub fn active_for_teacher(
        &self,
        teacher_id: &str,
        subject_id: &str,
    ) -> Vec<&TeachingAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.is_active && a.teacher_id == teacher_id && a.subject_id == subject_id)
            .collect()
    }

    /// Iterates all rows, active and deactivated.
    pub fn iter(&self) -> impl Iterator<Item = &TeachingAssignment> {
        self.assignments.iter()
    }

    /// Number of rows (including deactivated ones).
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
