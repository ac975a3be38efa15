//! Time slots and the weekly grid.
//!
//! A slot is a (day, period) coordinate in the weekly grid. The grid
//! configuration fixes the day list, periods per day, and lesson length;
//! time slot rows attach clock times to each coordinate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configured period in the weekly timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Weekday name.
    pub day: String,
    /// Period number within the day (1-based).
    pub period: u32,
    /// Start time, "HH:MM".
    pub start_time: String,
    /// End time, "HH:MM". Must be after `start_time`.
    pub end_time: String,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(
        id: impl Into<String>,
        day: impl Into<String>,
        period: u32,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            day: day.into(),
            period,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Whether the start time precedes the end time.
    ///
    /// "HH:MM" strings order lexicographically, so plain comparison works.
    pub fn has_valid_range(&self) -> bool {
        self.start_time < self.end_time
    }
}

/// A (day, period) coordinate in the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Weekday name.
    pub day: String,
    /// Period number within the day (1-based).
    pub period: u32,
}

impl Slot {
    /// Creates a slot coordinate.
    pub fn new(day: impl Into<String>, period: u32) -> Self {
        Self {
            day: day.into(),
            period,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} period {}", self.day, self.period)
    }
}

/// Shape of the weekly grid: days × periods, with a fixed lesson length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Teaching days, in display order.
    pub days: Vec<String>,
    /// Periods per day.
    pub periods_per_day: u32,
    /// Lesson length in minutes.
    pub period_minutes: u32,
}

impl GridConfig {
    /// Creates a grid configuration.
    pub fn new(days: Vec<String>, periods_per_day: u32, period_minutes: u32) -> Self {
        Self {
            days,
            periods_per_day,
            period_minutes,
        }
    }

    /// Lesson length in hours.
    #[inline]
    pub fn period_hours(&self) -> f64 {
        self.period_minutes as f64 / 60.0
    }

    /// Total number of slots in the grid.
    pub fn total_slots(&self) -> usize {
        self.days.len() * self.periods_per_day as usize
    }

    /// All slot coordinates, day-major.
    pub fn slots(&self) -> Vec<Slot> {
        let mut out = Vec::with_capacity(self.total_slots());
        for day in &self.days {
            for period in 1..=self.periods_per_day {
                out.push(Slot::new(day, period));
            }
        }
        out
    }
}

impl Default for GridConfig {
    /// Five-day week, eight 45-minute periods per day.
    fn default() -> Self {
        Self {
            days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            periods_per_day: 8,
            period_minutes: 45,
        }
    }
}
