//! Built-in room suitability rules.
//!
//! # Categories
//!
//! - **Type match**: subject-room-type preference rows
//! - **Capacity fit**: class size vs room capacity
//! - **Required features**: baseline equipment every lesson wants
//!
//! # Score Convention
//! Higher deltas mean a better fit; penalties are negative. The scorer
//! clamps the summed score at zero.

use super::{RuleOutcome, ScoringContext, SuitabilityRule};
use crate::models::Classroom;

/// Features every lesson wants a room to offer.
pub const DEFAULT_REQUIRED_FEATURES: [&str; 2] = ["Projector", "Whiteboard"];

/// Room-type preference match.
///
/// A preference row for the room's type contributes `(4 − priority) × 30`
/// (preferred 90, acceptable 60, last-resort 30) plus 20 when the type is
/// required. A subject with preferences that do not include the room's
/// type costs the candidate 20 points.
#[derive(Debug, Clone, Copy)]
pub struct TypeMatch;

impl SuitabilityRule for TypeMatch {
    fn name(&self) -> &'static str {
        "TYPE_MATCH"
    }

    fn evaluate(&self, room: &Classroom, context: &ScoringContext) -> RuleOutcome {
        let matched = context
            .preferences
            .iter()
            .find(|p| p.room_type_id == room.room_type_id);

        match matched {
            Some(preference) => {
                let mut outcome = RuleOutcome::reward(
                    preference.priority.weight(),
                    format!("{} room type for this subject", preference.priority.label()),
                );
                if preference.is_required {
                    outcome.merge(RuleOutcome::reward(20, "required room type"));
                }
                outcome
            }
            None if !context.preferences.is_empty() => {
                RuleOutcome::penalty(20, "room type not among subject preferences")
            }
            None => RuleOutcome::none(),
        }
    }

    fn description(&self) -> &'static str {
        "Subject room-type preference match"
    }
}

/// Capacity fit.
///
/// A room that seats the class earns a bonus scaled by how snugly it
/// fits (tighter fits waste fewer seats); a room that cannot seat the
/// class takes a hard 50-point penalty but is never excluded outright.
#[derive(Debug, Clone, Copy)]
pub struct CapacityFit;

impl SuitabilityRule for CapacityFit {
    fn name(&self) -> &'static str {
        "CAPACITY_FIT"
    }

    fn evaluate(&self, room: &Classroom, context: &ScoringContext) -> RuleOutcome {
        let students = context.student_count;
        if room.capacity >= students {
            let ratio = if room.capacity == 0 {
                0.0
            } else {
                students as f64 / room.capacity as f64
            };
            if ratio > 0.8 {
                RuleOutcome::reward(15, format!("snug fit for {students} students"))
            } else if ratio > 0.5 {
                RuleOutcome::reward(10, format!("good fit for {students} students"))
            } else {
                RuleOutcome::reward(5, format!("seats {students} students with room to spare"))
            }
        } else {
            RuleOutcome::penalty(
                50,
                format!(
                    "capacity {} below class size {students}",
                    room.capacity
                ),
            )
        }
    }

    fn description(&self) -> &'static str {
        "Class size vs room capacity"
    }
}

/// Required features.
///
/// A room offering every baseline feature earns a small bonus; missing
/// features are not penalized.
#[derive(Debug, Clone, Copy)]
pub struct RequiredFeatures;

impl SuitabilityRule for RequiredFeatures {
    fn name(&self) -> &'static str {
        "REQUIRED_FEATURES"
    }

    fn evaluate(&self, room: &Classroom, context: &ScoringContext) -> RuleOutcome {
        let has_all = context
            .required_features
            .iter()
            .all(|f| room.has_feature(f));
        if has_all {
            RuleOutcome::reward(10, "has all required features")
        } else {
            RuleOutcome::none()
        }
    }

    fn description(&self) -> &'static str {
        "Baseline feature availability"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PreferencePriority, RoomPreference};

    fn room(room_type: &str, capacity: u32) -> Classroom {
        Classroom::new("R1", "A101", room_type, capacity)
    }

    fn ctx_with_pref(priority: PreferencePriority, required: bool) -> ScoringContext {
        let mut pref = RoomPreference::new("PE", "GYM", priority);
        if required {
            pref = pref.required();
        }
        ScoringContext::new(30).with_preferences(vec![pref])
    }

    #[test]
    fn test_type_match_priorities() {
        let gym = room("GYM", 100);
        assert_eq!(
            TypeMatch
                .evaluate(&gym, &ctx_with_pref(PreferencePriority::Preferred, false))
                .points,
            90
        );
        assert_eq!(
            TypeMatch
                .evaluate(&gym, &ctx_with_pref(PreferencePriority::Acceptable, false))
                .points,
            60
        );
        assert_eq!(
            TypeMatch
                .evaluate(&gym, &ctx_with_pref(PreferencePriority::LastResort, false))
                .points,
            30
        );
    }

    #[test]
    fn test_type_match_required_bonus() {
        let gym = room("GYM", 100);
        let outcome = TypeMatch.evaluate(&gym, &ctx_with_pref(PreferencePriority::Preferred, true));
        assert_eq!(outcome.points, 110);
        assert_eq!(outcome.reasons.len(), 2);
    }

    #[test]
    fn test_type_mismatch_penalty() {
        let std_room = room("STD", 35);
        let outcome = TypeMatch.evaluate(&std_room, &ctx_with_pref(PreferencePriority::Preferred, true));
        assert_eq!(outcome.points, -20);
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_no_preferences_is_neutral() {
        let std_room = room("STD", 35);
        let outcome = TypeMatch.evaluate(&std_room, &ScoringContext::new(30));
        assert_eq!(outcome.points, 0);
        assert!(outcome.reasons.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_capacity_tiers() {
        let ctx = ScoringContext::new(30);
        // 30/32 = 0.94 → snug.
        assert_eq!(CapacityFit.evaluate(&room("STD", 32), &ctx).points, 15);
        // 30/50 = 0.6 → good.
        assert_eq!(CapacityFit.evaluate(&room("STD", 50), &ctx).points, 10);
        // 30/100 = 0.3 → spare.
        assert_eq!(CapacityFit.evaluate(&room("STD", 100), &ctx).points, 5);
    }

    #[test]
    fn test_capacity_shortfall_penalty() {
        let outcome = CapacityFit.evaluate(&room("STD", 25), &ScoringContext::new(30));
        assert_eq!(outcome.points, -50);
        assert!(outcome.warnings[0].contains("25"));
        assert!(outcome.warnings[0].contains("30"));
    }

    #[test]
    fn test_empty_class_gets_spare_bonus() {
        let outcome = CapacityFit.evaluate(&room("STD", 30), &ScoringContext::new(0));
        assert_eq!(outcome.points, 5);
    }

    #[test]
    fn test_required_features_all_present() {
        let equipped = room("STD", 30)
            .with_feature("Projector")
            .with_feature("Whiteboard");
        let outcome = RequiredFeatures.evaluate(&equipped, &ScoringContext::new(30));
        assert_eq!(outcome.points, 10);
    }

    #[test]
    fn test_required_features_partial_is_neutral() {
        let partial = room("STD", 30).with_feature("Projector");
        let outcome = RequiredFeatures.evaluate(&partial, &ScoringContext::new(30));
        assert_eq!(outcome.points, 0);
        assert!(outcome.warnings.is_empty());
    }
}
