//! Curriculum progress and valid placement slots.
//!
//! Pure calculations over the current entry collection and the registry:
//! how much of each subject's weekly allocation is scheduled, and which
//! grid cells remain offerable for a subject. Recomputed after every
//! entry mutation — nothing here caches.

use std::collections::{HashMap, HashSet};

use crate::models::{Slot, TimetableEntry};
use crate::registry::Registry;

use super::ViewMode;

/// Scheduled-vs-required hours for one subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectProgress {
    /// Hours already placed on the grid.
    pub scheduled_hours: f64,
    /// Hours the allocation requires per week.
    pub required_hours: f64,
    /// `round(scheduled / required × 100)`, 0 when nothing is required.
    pub percentage: u32,
}

impl SubjectProgress {
    /// Creates a progress record, deriving the percentage.
    pub fn new(scheduled_hours: f64, required_hours: f64) -> Self {
        let percentage = if required_hours <= 0.0 {
            0
        } else {
            (scheduled_hours / required_hours * 100.0).round() as u32
        };
        Self {
            scheduled_hours,
            required_hours,
            percentage,
        }
    }

    /// Whether the allocation is fully scheduled.
    pub fn is_complete(&self) -> bool {
        self.percentage >= 100
    }
}

/// Computes per-subject progress for a class or a teacher.
///
/// Class mode considers every subject allocated for the class's grade;
/// teacher mode considers the teacher's qualification set, with required
/// hours summed over each class the teacher actively teaches the subject
/// in. Unknown entities yield an empty map.
pub fn subject_progress(
    entries: &[TimetableEntry],
    registry: &Registry,
    view_mode: ViewMode,
    entity_id: &str,
) -> HashMap<String, SubjectProgress> {
    let period_hours = registry.grid.period_hours();
    let mut out = HashMap::new();

    match view_mode {
        ViewMode::Class => {
            let Some(class) = registry.class_section(entity_id) else {
                return out;
            };
            for allocation in registry.allocations.for_grade(&class.grade_id) {
                let scheduled = entries
                    .iter()
                    .filter(|e| e.class_id == entity_id && e.subject_id == allocation.subject_id)
                    .count() as f64
                    * period_hours;
                out.insert(
                    allocation.subject_id.clone(),
                    SubjectProgress::new(scheduled, allocation.weekly_hours),
                );
            }
        }
        ViewMode::Teacher => {
            let Some(teacher) = registry.teacher(entity_id) else {
                return out;
            };
            for subject_id in &teacher.subject_ids {
                let mut required = 0.0;
                for binding in registry.teaching.active_for_teacher(entity_id, subject_id) {
                    if let Some(class) = registry.class_section(&binding.class_id) {
                        if let Some(hours) =
                            registry.allocations.weekly_hours(&class.grade_id, subject_id)
                        {
                            required += hours;
                        }
                    }
                }
                let scheduled = entries
                    .iter()
                    .filter(|e| e.teacher_id == entity_id && &e.subject_id == subject_id)
                    .count() as f64
                    * period_hours;
                out.insert(
                    subject_id.clone(),
                    SubjectProgress::new(scheduled, required),
                );
            }
        }
    }

    out
}

/// Grid cells where the entity is free and the subject still needs hours.
///
/// Empty once the subject's progress reaches 100%. These are exactly the
/// cells a UI may offer as placement targets.
pub fn valid_slots(
    entries: &[TimetableEntry],
    registry: &Registry,
    subject_id: &str,
    view_mode: ViewMode,
    entity_id: &str,
) -> Vec<Slot> {
    let progress = subject_progress(entries, registry, view_mode, entity_id);
    if progress.get(subject_id).map(|p| p.is_complete()).unwrap_or(false) {
        return Vec::new();
    }

    let occupied: HashSet<(&str, u32)> = entries
        .iter()
        .filter(|e| match view_mode {
            ViewMode::Class => e.class_id == entity_id,
            ViewMode::Teacher => e.teacher_id == entity_id,
        })
        .map(|e| (e.day.as_str(), e.period))
        .collect();

    let mut slots = Vec::new();
    for day in &registry.grid.days {
        for period in 1..=registry.grid.periods_per_day {
            if !occupied.contains(&(day.as_str(), period)) {
                slots.push(Slot::new(day, period));
            }
        }
    }
    slots
}
