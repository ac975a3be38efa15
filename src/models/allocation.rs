//! Curriculum hour allocations.
//!
//! The allocation ledger records how many weekly hours of each subject a
//! grade must receive. It is the source of truth the progress computation
//! measures against.

use serde::{Deserialize, Serialize};

/// Weekly-hour requirement for a (grade, subject) pair.
///
/// The semester total is always derived from the stored fields; it cannot
/// drift out of sync because it is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeSubjectAllocation {
    /// Grade the requirement applies to.
    pub grade_id: String,
    /// Subject being allocated.
    pub subject_id: String,
    /// Required teaching hours per week.
    pub weekly_hours: f64,
    /// Number of weeks in the semester.
    pub semester_weeks: u32,
}

impl GradeSubjectAllocation {
    /// Creates a new allocation.
    pub fn new(
        grade_id: impl Into<String>,
        subject_id: impl Into<String>,
        weekly_hours: f64,
        semester_weeks: u32,
    ) -> Self {
        Self {
            grade_id: grade_id.into(),
            subject_id: subject_id.into(),
            weekly_hours,
            semester_weeks,
        }
    }

    /// Total hours over the semester: `weekly_hours × semester_weeks`.
    #[inline]
    pub fn total_hours(&self) -> f64 {
        self.weekly_hours * self.semester_weeks as f64
    }
}

/// The allocation ledger.
///
/// Invariant: at most one row per (grade, subject); `upsert` replaces
/// an existing row for the pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationLedger {
    allocations: Vec<GradeSubjectAllocation>,
}

impl AllocationLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the allocation for (grade, subject).
    pub fn upsert(&mut self, allocation: GradeSubjectAllocation) {
        match self.allocations.iter_mut().find(|a| {
            a.grade_id == allocation.grade_id && a.subject_id == allocation.subject_id
        }) {
            Some(existing) => *existing = allocation,
            None => self.allocations.push(allocation),
        }
    }

    /// The allocation for (grade, subject), if any.
    pub fn get(&self, grade_id: &str, subject_id: &str) -> Option<&GradeSubjectAllocation> {
        self.allocations
            .iter()
            .find(|a| a.grade_id == grade_id && a.subject_id == subject_id)
    }

    /// All allocations for a grade, in insertion order.
    pub fn for_grade(&self, grade_id: &str) -> Vec<&GradeSubjectAllocation> {
        self.allocations
            .iter()
            .filter(|a| a.grade_id == grade_id)
            .collect()
    }

    /// Weekly hours required for (grade, subject), if allocated.
    pub fn weekly_hours(&self, grade_id: &str, subject_id: &str) -> Option<f64> {
        self.get(grade_id, subject_id).map(|a| a.weekly_hours)
    }

    /// Iterates all rows.
    pub fn iter(&self) -> impl Iterator<Item = &GradeSubjectAllocation> {
        self.allocations.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    /// Whether the ledger has no rows.
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}
