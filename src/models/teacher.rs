//! Teacher model.
//!
//! A teacher carries a qualification set (the subjects they may teach)
//! and a weekly hour limit that the overload check enforces. The current
//! weekly load is always derived from scheduled entries, never stored.

use serde::{Deserialize, Serialize};

/// A teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Email address, unique across teachers.
    pub email: String,
    /// Subjects this teacher is qualified to teach.
    pub subject_ids: Vec<String>,
    /// Maximum teaching hours per week.
    pub weekly_hour_limit: f64,
}

impl Teacher {
    /// Creates a new teacher.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: email.into(),
            subject_ids: Vec::new(),
            weekly_hour_limit: 40.0,
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a subject qualification.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_ids.push(subject_id.into());
        self
    }

    /// Sets the weekly hour limit.
    pub fn with_hour_limit(mut self, hours: f64) -> Self {
        self.weekly_hour_limit = hours;
        self
    }

    /// Whether this teacher is qualified to teach a subject.
    pub fn is_qualified_for(&self, subject_id: &str) -> bool {
        self.subject_ids.iter().any(|s| s == subject_id)
    }
}
