//! Schedule-level constraint validation.
//!
//! Produces the full conflict list from scratch on every call — never
//! incremental — so the report is always correct relative to the current
//! entry collection. Three checks run, each with its own emission
//! granularity:
//!
//! 1. Teacher double-booking: one error per offending entry beyond the
//!    first at a slot.
//! 2. Teacher overload: one warning per teacher, listing all entries.
//! 3. Room clash: one error per contended (room, day, period) group.
//!
//! Conflicts are advisory; none of them block entry creation.

use std::collections::{HashMap, HashSet};

use crate::models::{Conflict, TimetableEntry};
use crate::registry::Registry;

/// Validates all scheduling constraints over the given entries.
///
/// Pure: calling twice with the same input yields the same conflicts in
/// the same order.
pub fn validate_constraints(entries: &[TimetableEntry], registry: &Registry) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    detect_double_bookings(entries, &mut conflicts);
    detect_overloads(entries, registry, &mut conflicts);
    detect_room_clashes(entries, &mut conflicts);
    conflicts
}

/// One conflict per entry that repeats a (teacher, day, period) already seen.
fn detect_double_bookings(entries: &[TimetableEntry], conflicts: &mut Vec<Conflict>) {
    let mut seen: HashSet<(&str, &str, u32)> = HashSet::new();
    for entry in entries {
        let key = (entry.teacher_id.as_str(), entry.day.as_str(), entry.period);
        if !seen.insert(key) {
            conflicts.push(Conflict::teacher_double_booking(
                &entry.teacher_id,
                &entry.day,
                entry.period,
                vec![entry.id.clone()],
            ));
        }
    }
}

/// One conflict per teacher whose scheduled hours exceed their limit.
fn detect_overloads(
    entries: &[TimetableEntry],
    registry: &Registry,
    conflicts: &mut Vec<Conflict>,
) {
    let period_hours = registry.grid.period_hours();

    let mut order: Vec<&str> = Vec::new();
    let mut per_teacher: HashMap<&str, Vec<String>> = HashMap::new();
    for entry in entries {
        let ids = per_teacher.entry(entry.teacher_id.as_str()).or_insert_with(|| {
            order.push(entry.teacher_id.as_str());
            Vec::new()
        });
        ids.push(entry.id.clone());
    }

    for teacher_id in order {
        let ids = &per_teacher[teacher_id];
        let scheduled = ids.len() as f64 * period_hours;
        if let Some(teacher) = registry.teacher(teacher_id) {
            if scheduled > teacher.weekly_hour_limit {
                conflicts.push(Conflict::teacher_overload(
                    teacher_id,
                    scheduled,
                    teacher.weekly_hour_limit,
                    ids.clone(),
                ));
            }
        }
    }
}

/// One conflict per (room, day, period) recorded by more than one entry.
fn detect_room_clashes(entries: &[TimetableEntry], conflicts: &mut Vec<Conflict>) {
    let mut order: Vec<(&str, &str, u32)> = Vec::new();
    let mut groups: HashMap<(&str, &str, u32), Vec<String>> = HashMap::new();
    for entry in entries {
        if let Some(room_id) = &entry.room_id {
            let key = (room_id.as_str(), entry.day.as_str(), entry.period);
            groups
                .entry(key)
                .or_insert_with(|| {
                    order.push(key);
                    Vec::new()
                })
                .push(entry.id.clone());
        }
    }

    for key in order {
        let ids = &groups[&key];
        if ids.len() > 1 {
            conflicts.push(Conflict::room_clash(key.0, key.1, key.2, ids.clone()));
        }
    }
}
