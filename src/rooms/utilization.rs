//! Room utilization metrics.
//!
//! Computes per-room occupancy indicators from the current assignments:
//! how full each room's week is, when it peaks, and how many conflicts
//! it is involved in. Pure and recomputed on demand.

use crate::models::{Classroom, GridConfig, RoomAssignment, RoomConflict, Slot, TimetableEntry};

/// Occupancy indicators for one room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomUtilization {
    /// Room id.
    pub room_id: String,
    /// Room name.
    pub room_name: String,
    /// Grid size (days × periods per day).
    pub total_slots: usize,
    /// Number of assignments held by the room.
    pub occupied_slots: usize,
    /// `round(occupied / total × 100)`.
    pub utilization_percentage: u32,
    /// Up to three busiest (day, period) cells, busiest first; ties keep
    /// first-seen order.
    pub peak_hours: Vec<Slot>,
    /// Room conflicts involving this room.
    pub conflict_count: usize,
}

impl RoomUtilization {
    /// Computes utilization for every room in the catalog.
    ///
    /// Assignments join to their entries for slot coordinates; orphaned
    /// assignments are ignored.
    pub fn calculate(
        rooms: &[Classroom],
        assignments: &[RoomAssignment],
        entries: &[TimetableEntry],
        conflicts: &[RoomConflict],
        grid: &GridConfig,
    ) -> Vec<Self> {
        let total_slots = grid.total_slots();
        rooms
            .iter()
            .map(|room| {
                let mut slot_counts: Vec<(Slot, usize)> = Vec::new();
                let mut occupied = 0usize;

                for assignment in assignments.iter().filter(|a| a.room_id == room.id) {
                    let Some(entry) = entries.iter().find(|e| e.id == assignment.entry_id) else {
                        continue;
                    };
                    occupied += 1;
                    let slot = Slot::new(&entry.day, entry.period);
                    match slot_counts.iter_mut().find(|(s, _)| *s == slot) {
                        Some((_, count)) => *count += 1,
                        None => slot_counts.push((slot, 1)),
                    }
                }

                let utilization_percentage = if total_slots == 0 {
                    0
                } else {
                    (occupied as f64 / total_slots as f64 * 100.0).round() as u32
                };

                slot_counts.sort_by(|a, b| b.1.cmp(&a.1));
                let peak_hours = slot_counts.into_iter().take(3).map(|(s, _)| s).collect();

                Self {
                    room_id: room.id.clone(),
                    room_name: room.name.clone(),
                    total_slots,
                    occupied_slots: occupied,
                    utilization_percentage,
                    peak_hours,
                    conflict_count: conflicts.iter().filter(|c| c.involves_room(&room.id)).count(),
                }
            })
            .collect()
    }
}
