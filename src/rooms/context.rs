//! Scoring context for room suitability rules.

use crate::models::{RoomPreference, TimetableEntry};
use crate::registry::Registry;

use super::rules::DEFAULT_REQUIRED_FEATURES;

/// Per-lesson state passed to suitability rules.
///
/// Carries the class size, the subject's ranked room-type preferences,
/// and the baseline feature set every lesson wants.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    /// Students attending the lesson.
    pub student_count: u32,
    /// The subject's room-type preference rows, in priority order.
    pub preferences: Vec<RoomPreference>,
    /// Features a room should offer regardless of subject.
    pub required_features: Vec<String>,
}

impl ScoringContext {
    /// Creates a context with the baseline feature requirements.
    pub fn new(student_count: u32) -> Self {
        Self {
            student_count,
            preferences: Vec::new(),
            required_features: DEFAULT_REQUIRED_FEATURES
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }

    /// Sets the subject's preference rows.
    pub fn with_preferences(mut self, preferences: Vec<RoomPreference>) -> Self {
        self.preferences = preferences;
        self
    }

    /// Overrides the baseline feature requirements.
    pub fn with_required_features(mut self, features: Vec<String>) -> Self {
        self.required_features = features;
        self
    }

    /// Builds the context for a timetable entry from registry data.
    ///
    /// An entry whose class is unknown scores against a class size of 0.
    pub fn for_entry(entry: &TimetableEntry, registry: &Registry) -> Self {
        let student_count = registry
            .class_section(&entry.class_id)
            .map(|c| c.student_count)
            .unwrap_or(0);
        Self::new(student_count)
            .with_preferences(registry.preferences.for_subject(&entry.subject_id))
    }
}
