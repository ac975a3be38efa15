//! Room suitability scoring and assignment.
//!
//! Provides rule-based room scoring (type match, capacity fit, feature
//! requirements), a composable scorer, the greedy auto-assignment pass,
//! room-conflict detection, and utilization metrics.
//!
//! # Usage
//!
//! ```
//! use timetable_engine::rooms::{RoomScorer, ScoringContext};
//! use timetable_engine::models::Classroom;
//!
//! let scorer = RoomScorer::default();
//! let rooms = vec![Classroom::new("R1", "A101", "STD", 30)];
//! let ctx = ScoringContext::new(28);
//! let suggestions = scorer.score(&rooms, &ctx, &Default::default());
//! assert_eq!(suggestions.len(), 1);
//! ```

mod assigner;
mod context;
pub mod rules;
mod scorer;
mod utilization;

pub use assigner::{
    assign_room_manually, auto_assign_rooms, detect_room_conflicts, occupied_rooms_at,
};
pub use context::ScoringContext;
pub use scorer::{score_rooms, RoomScorer, RoomSuggestion};
pub use utilization::RoomUtilization;

use crate::models::Classroom;
use std::fmt::Debug;

/// Outcome of one scoring rule for one candidate room.
///
/// Positive contributions explain themselves through `reasons`, negative
/// ones through `warnings`; a rule that does not apply returns
/// [`RuleOutcome::none`].
#[derive(Debug, Clone, Default)]
pub struct RuleOutcome {
    /// Score delta (may be negative).
    pub points: i32,
    /// Explanations for positive contributions.
    pub reasons: Vec<String>,
    /// Explanations for negative contributions.
    pub warnings: Vec<String>,
}

impl RuleOutcome {
    /// A rule that contributes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// A positive contribution with its explanation.
    pub fn reward(points: i32, reason: impl Into<String>) -> Self {
        Self {
            points,
            reasons: vec![reason.into()],
            warnings: Vec::new(),
        }
    }

    /// A negative contribution with its explanation.
    pub fn penalty(points: i32, warning: impl Into<String>) -> Self {
        Self {
            points: -points.abs(),
            reasons: Vec::new(),
            warnings: vec![warning.into()],
        }
    }

    /// Merges another outcome into this one.
    pub fn merge(&mut self, other: RuleOutcome) {
        self.points += other.points;
        self.reasons.extend(other.reasons);
        self.warnings.extend(other.warnings);
    }
}

/// A room suitability rule.
///
/// # Score Convention
/// **Higher score = better fit.** Rules return deltas that the scorer
/// sums per candidate; the final score is clamped at zero.
pub trait SuitabilityRule: Send + Sync + Debug {
    /// Rule name (e.g., "TYPE_MATCH").
    fn name(&self) -> &'static str;

    /// Evaluates the rule for one candidate room.
    fn evaluate(&self, room: &Classroom, context: &ScoringContext) -> RuleOutcome;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
