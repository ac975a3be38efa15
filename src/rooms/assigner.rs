//! Room assignment and room-conflict detection.
//!
//! The auto-assignment pass is deliberately greedy: entries are visited
//! in iteration order, each takes the highest-scoring free room, and no
//! swaps are attempted to rescue later entries. Detection runs over the
//! full assignment set afterwards and reports what greed could not avoid.

use std::collections::{HashMap, HashSet};

use crate::error::{EngineError, EngineResult};
use crate::models::{ConflictStatus, RoomAssignment, RoomConflict, TimetableEntry};
use crate::registry::Registry;

use super::scorer::score_rooms;

/// Rooms held by assignments whose entries sit at (day, period).
pub fn occupied_rooms_at(
    assignments: &[RoomAssignment],
    entries: &[TimetableEntry],
    day: &str,
    period: u32,
) -> HashSet<String> {
    assignments
        .iter()
        .filter_map(|a| {
            entries
                .iter()
                .find(|e| e.id == a.entry_id)
                .filter(|e| e.occupies(day, period))
                .map(|_| a.room_id.clone())
        })
        .collect()
}

/// Greedily assigns rooms to every entry that lacks one.
///
/// Each unassigned entry, in iteration order, takes the top-scored free
/// candidate at its slot — provided the score is positive. Winners with
/// scorer warnings carry `ConflictStatus::Warning`. Entries for which no
/// candidate scores above zero stay unassigned; their absence from the
/// result is the report. Returns only the newly created assignments.
pub fn auto_assign_rooms(
    entries: &[TimetableEntry],
    existing: &[RoomAssignment],
    registry: &Registry,
) -> Vec<RoomAssignment> {
    let already_assigned: HashSet<&str> = existing.iter().map(|a| a.entry_id.as_str()).collect();
    let mut created: Vec<RoomAssignment> = Vec::new();

    for entry in entries {
        if already_assigned.contains(entry.id.as_str()) {
            continue;
        }

        let mut occupied = occupied_rooms_at(existing, entries, &entry.day, entry.period);
        for assignment in &created {
            let holds_slot = entries
                .iter()
                .find(|e| e.id == assignment.entry_id)
                .map(|e| e.occupies(&entry.day, entry.period))
                .unwrap_or(false);
            if holds_slot {
                occupied.insert(assignment.room_id.clone());
            }
        }

        let suggestions = score_rooms(entry, registry, &occupied);
        if let Some(best) = suggestions.first() {
            if best.suitability_score > 0 {
                let status = if best.warnings.is_empty() {
                    ConflictStatus::None
                } else {
                    ConflictStatus::Warning
                };
                tracing::debug!(
                    entry_id = %entry.id,
                    room_id = %best.room_id,
                    score = best.suitability_score,
                    "auto-assigned room"
                );
                created.push(RoomAssignment::auto(&entry.id, &best.room_id, status));
            }
        }
    }

    created
}

/// Manually binds a room to an entry.
///
/// Fails with [`EngineError::RoomOccupied`] when another assignment
/// already holds the room at the entry's slot. On success any previous
/// assignment for the entry is replaced (remove-then-insert).
pub fn assign_room_manually(
    entries: &[TimetableEntry],
    assignments: &mut Vec<RoomAssignment>,
    registry: &Registry,
    entry_id: &str,
    room_id: &str,
) -> EngineResult<RoomAssignment> {
    let entry = entries
        .iter()
        .find(|e| e.id == entry_id)
        .ok_or_else(|| EngineError::UnknownEntity {
            entity: "timetable entry",
            id: entry_id.to_string(),
        })?;
    if registry.room(room_id).is_none() {
        return Err(EngineError::UnknownEntity {
            entity: "room",
            id: room_id.to_string(),
        });
    }

    let occupied = assignments.iter().any(|a| {
        a.room_id == room_id
            && a.entry_id != entry.id
            && entries
                .iter()
                .find(|e| e.id == a.entry_id)
                .map(|e| e.occupies(&entry.day, entry.period))
                .unwrap_or(false)
    });
    if occupied {
        return Err(EngineError::RoomOccupied {
            room_id: room_id.to_string(),
            day: entry.day.clone(),
            period: entry.period,
        });
    }

    assignments.retain(|a| a.entry_id != entry.id);
    let assignment = RoomAssignment::manual(&entry.id, room_id);
    tracing::debug!(entry_id = %entry.id, room_id, "manually assigned room");
    assignments.push(assignment.clone());
    Ok(assignment)
}

/// Detects double-booked rooms across the assignment set.
///
/// Assignments join to their entries for the slot coordinate; every
/// (room, day, period) held by more than one assignment yields one
/// conflict carrying all involved entry ids and the standard resolutions.
/// Assignments whose entry no longer exists are skipped.
pub fn detect_room_conflicts(
    assignments: &[RoomAssignment],
    entries: &[TimetableEntry],
) -> Vec<RoomConflict> {
    let mut order: Vec<(&str, &str, u32)> = Vec::new();
    let mut groups: HashMap<(&str, &str, u32), Vec<String>> = HashMap::new();

    for assignment in assignments {
        let Some(entry) = entries.iter().find(|e| e.id == assignment.entry_id) else {
            continue;
        };
        let key = (assignment.room_id.as_str(), entry.day.as_str(), entry.period);
        groups
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(entry.id.clone());
    }

    let mut conflicts = Vec::new();
    for key in order {
        let ids = &groups[&key];
        if ids.len() > 1 {
            conflicts.push(RoomConflict::double_booking(key.0, key.1, key.2, ids.clone()));
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssignedBy, ClassSection, Classroom, ResolutionKind, Severity};

    fn entry(id: &str, day: &str, period: u32) -> TimetableEntry {
        TimetableEntry::new("C1", "T1", "MATH", format!("{day}-{period}"), day, period)
            .with_id(id)
    }

    fn three_room_registry() -> Registry {
        Registry::new()
            .with_class_section(ClassSection::new("C1", "G7", 25))
            .with_room(Classroom::new("R1", "A101", "STD", 30))
            .with_room(Classroom::new("R2", "A102", "STD", 30))
            .with_room(Classroom::new("R3", "A103", "STD", 30))
    }

    #[test]
    fn test_auto_assign_fills_free_entries() {
        let registry = three_room_registry();
        let entries = vec![entry("E1", "Monday", 1), entry("E2", "Tuesday", 1)];

        let created = auto_assign_rooms(&entries, &[], &registry);
        assert_eq!(created.len(), 2);
        assert!(created.iter().all(|a| a.is_auto_assigned));
        assert!(created.iter().all(|a| a.assigned_by == AssignedBy::System));
        // Different slots → both get the top-ranked room.
        assert_eq!(created[0].room_id, "R1");
        assert_eq!(created[1].room_id, "R1");
    }

    #[test]
    fn test_auto_assign_exhausts_room_pool() {
        // Five lessons in one slot against three rooms: exactly three
        // assignments, two entries stay unassigned.
        let registry = three_room_registry();
        let entries: Vec<_> = (1..=5).map(|i| entry(&format!("E{i}"), "Monday", 1)).collect();

        let created = auto_assign_rooms(&entries, &[], &registry);
        assert_eq!(created.len(), 3);
        let rooms: HashSet<_> = created.iter().map(|a| a.room_id.as_str()).collect();
        assert_eq!(rooms.len(), 3);
        let assigned: HashSet<_> = created.iter().map(|a| a.entry_id.as_str()).collect();
        assert_eq!(assigned, ["E1", "E2", "E3"].into_iter().collect());
    }

    #[test]
    fn test_auto_assign_skips_already_assigned() {
        let registry = three_room_registry();
        let entries = vec![entry("E1", "Monday", 1), entry("E2", "Monday", 1)];
        let existing = vec![RoomAssignment::manual("E1", "R1")];

        let created = auto_assign_rooms(&entries, &existing, &registry);
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].entry_id, "E2");
        // R1 is taken at the slot, so E2 gets the next room.
        assert_eq!(created[0].room_id, "R2");
    }

    #[test]
    fn test_auto_assign_warning_status_on_capacity_shortfall() {
        let registry = Registry::new()
            .with_class_section(ClassSection::new("C1", "G7", 40))
            .with_room(
                Classroom::new("R1", "A101", "STD", 20)
                    .with_feature("Projector")
                    .with_feature("Whiteboard"),
            );
        let entries = vec![entry("E1", "Monday", 1)];

        // -50 (shortfall) + 10 (features) < 0 → clamped to 0 → no assignment.
        let created = auto_assign_rooms(&entries, &[], &registry);
        assert!(created.is_empty());
    }

    #[test]
    fn test_manual_assignment_replaces_previous() {
        let registry = three_room_registry();
        let entries = vec![entry("E1", "Monday", 1)];
        let mut assignments = vec![RoomAssignment::manual("E1", "R1")];

        let new = assign_room_manually(&entries, &mut assignments, &registry, "E1", "R2").unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].id, new.id);
        assert_eq!(new.room_id, "R2");
        assert_eq!(new.assigned_by, AssignedBy::User);
        assert_eq!(new.conflict_status, ConflictStatus::None);
    }

    #[test]
    fn test_manual_assignment_rejects_occupied_room() {
        let registry = three_room_registry();
        let entries = vec![entry("E1", "Monday", 1), entry("E2", "Monday", 1)];
        let mut assignments = vec![RoomAssignment::manual("E1", "R1")];

        let err = assign_room_manually(&entries, &mut assignments, &registry, "E2", "R1")
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::RoomOccupied {
                room_id: "R1".into(),
                day: "Monday".into(),
                period: 1,
            }
        );
        assert_eq!(assignments.len(), 1);
    }

    #[test]
    fn test_manual_assignment_allows_same_room_other_slot() {
        let registry = three_room_registry();
        let entries = vec![entry("E1", "Monday", 1), entry("E2", "Monday", 2)];
        let mut assignments = vec![RoomAssignment::manual("E1", "R1")];

        assert!(assign_room_manually(&entries, &mut assignments, &registry, "E2", "R1").is_ok());
        assert_eq!(assignments.len(), 2);
    }

    #[test]
    fn test_manual_assignment_unknown_entry() {
        let registry = three_room_registry();
        let mut assignments = Vec::new();
        let err = assign_room_manually(&[], &mut assignments, &registry, "E9", "R1").unwrap_err();
        assert!(matches!(err, EngineError::UnknownEntity { entity, .. } if entity == "timetable entry"));
    }

    #[test]
    fn test_manual_assignment_unknown_room() {
        let registry = three_room_registry();
        let entries = vec![entry("E1", "Monday", 1)];
        let mut assignments = Vec::new();
        let err =
            assign_room_manually(&entries, &mut assignments, &registry, "E1", "R9").unwrap_err();
        assert!(matches!(err, EngineError::UnknownEntity { entity, .. } if entity == "room"));
    }

    #[test]
    fn test_detect_room_conflicts() {
        let entries = vec![
            entry("E1", "Monday", 1),
            entry("E2", "Monday", 1),
            entry("E3", "Monday", 2),
        ];
        let assignments = vec![
            RoomAssignment::manual("E1", "R1"),
            RoomAssignment::manual("E2", "R1"),
            RoomAssignment::manual("E3", "R1"),
        ];

        let conflicts = detect_room_conflicts(&assignments, &entries);
        assert_eq!(conflicts.len(), 1);
        let c = &conflicts[0];
        assert_eq!(c.room_id, "R1");
        assert_eq!(c.severity, Severity::Error);
        assert_eq!(c.entry_ids, vec!["E1".to_string(), "E2".to_string()]);
        assert_eq!(c.resolutions[0].kind, ResolutionKind::MoveToRoom);
        assert_eq!(c.resolutions[1].kind, ResolutionKind::ChangeTime);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let entries = vec![entry("E1", "Monday", 1), entry("E2", "Monday", 1)];
        let assignments = vec![
            RoomAssignment::manual("E1", "R1"),
            RoomAssignment::manual("E2", "R1"),
        ];
        let first = detect_room_conflicts(&assignments, &entries);
        let second = detect_room_conflicts(&assignments, &entries);
        assert_eq!(first, second);
    }

    #[test]
    fn test_orphaned_assignment_skipped() {
        let entries = vec![entry("E1", "Monday", 1)];
        let assignments = vec![
            RoomAssignment::manual("E1", "R1"),
            RoomAssignment::manual("GONE", "R1"),
        ];
        assert!(detect_room_conflicts(&assignments, &entries).is_empty());
    }
}
