//! Room scoring engine.
//!
//! Composes suitability rules into a ranked suggestion list for one
//! lesson. Scoring is pure and deterministic: identical inputs produce
//! identical scores and ordering, with ties broken by room catalog order
//! (stable sort).

use std::collections::HashSet;
use std::sync::Arc;

use super::rules::{CapacityFit, RequiredFeatures, TypeMatch};
use super::{RuleOutcome, ScoringContext, SuitabilityRule};
use crate::models::{Classroom, TimetableEntry};
use crate::registry::Registry;

/// A scored room candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSuggestion {
    /// Candidate room id.
    pub room_id: String,
    /// Candidate room name.
    pub room_name: String,
    /// Summed rule score, clamped at zero.
    pub suitability_score: i32,
    /// Why the room fits.
    pub reasons: Vec<String>,
    /// Why the room may not fit.
    pub warnings: Vec<String>,
}

/// A composable room scorer.
///
/// The default scorer carries the three built-in rules (type match,
/// capacity fit, required features); callers may compose their own set.
#[derive(Clone)]
pub struct RoomScorer {
    rules: Vec<Arc<dyn SuitabilityRule>>,
}

impl RoomScorer {
    /// Creates an empty scorer with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule.
    pub fn with_rule<R: SuitabilityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Scores every candidate room for a lesson.
    ///
    /// Candidates are the active rooms not in `occupied`, evaluated in
    /// catalog order. Output is sorted by score descending; the sort is
    /// stable so equal scores keep catalog order.
    pub fn score(
        &self,
        rooms: &[Classroom],
        context: &ScoringContext,
        occupied: &HashSet<String>,
    ) -> Vec<RoomSuggestion> {
        let mut suggestions: Vec<RoomSuggestion> = rooms
            .iter()
            .filter(|r| r.is_active && !occupied.contains(&r.id))
            .map(|room| self.score_one(room, context))
            .collect();

        suggestions.sort_by(|a, b| b.suitability_score.cmp(&a.suitability_score));
        suggestions
    }

    fn score_one(&self, room: &Classroom, context: &ScoringContext) -> RoomSuggestion {
        let mut total = RuleOutcome::none();
        for rule in &self.rules {
            total.merge(rule.evaluate(room, context));
        }

        RoomSuggestion {
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            suitability_score: total.points.max(0),
            reasons: total.reasons,
            warnings: total.warnings,
        }
    }
}

impl Default for RoomScorer {
    /// The standard rule set.
    fn default() -> Self {
        Self::new()
            .with_rule(TypeMatch)
            .with_rule(CapacityFit)
            .with_rule(RequiredFeatures)
    }
}

impl std::fmt::Debug for RoomScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomScorer")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Scores rooms for one timetable entry using the standard rule set.
///
/// `occupied` holds the rooms already taken at the entry's slot by other
/// assignments; they are excluded from the candidate pool.
pub fn score_rooms(
    entry: &TimetableEntry,
    registry: &Registry,
    occupied: &HashSet<String>,
) -> Vec<RoomSuggestion> {
    let context = ScoringContext::for_entry(entry, registry);
    RoomScorer::default().score(&registry.rooms, &context, occupied)
}
