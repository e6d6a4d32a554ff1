//! Rotation schedule and the per-day window it derives

use crate::{CYCLE_DAYS, REFERENCE_EPOCH, WINDOW_SIZE};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::ops::Range;

/// Deterministic daily rotation over the ordered catalog
///
/// Holds the three system constants (reference epoch, cycle length, window
/// size) so tests can exercise alternative schedules; production code uses
/// `RotationSchedule::default()`.
#[derive(Debug, Clone)]
pub struct RotationSchedule {
    /// Day the cycle is counted from
    reference_epoch: NaiveDate,

    /// Days per full cycle
    cycle_days: i64,

    /// Records exposed per day
    window_size: usize,
}

impl Default for RotationSchedule {
    fn default() -> Self {
        Self { reference_epoch: REFERENCE_EPOCH, cycle_days: CYCLE_DAYS, window_size: WINDOW_SIZE }
    }
}

impl RotationSchedule {
    /// Create a schedule with explicit parameters
    pub fn new(reference_epoch: NaiveDate, cycle_days: i64, window_size: usize) -> Self {
        Self { reference_epoch, cycle_days, window_size }
    }

    /// Records exposed per day
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Whole calendar days elapsed since the reference epoch at `at`
    ///
    /// Partial days truncate: every instant within one UTC calendar day
    /// yields the same count. Negative for instants before the epoch.
    pub fn elapsed_days_at(&self, at: DateTime<Utc>) -> i64 {
        (at.date_naive() - self.reference_epoch).num_days()
    }

    /// Position within the repeating cycle, always in `[0, cycle_days)`
    pub fn cycle_position_at(&self, at: DateTime<Utc>) -> i64 {
        self.elapsed_days_at(at).rem_euclid(self.cycle_days)
    }

    /// The window of catalog indices visible at `at` for a catalog of
    /// `catalog_len` records
    ///
    /// A start index at or past the end of the catalog yields the empty
    /// window. This happens on late cycle days when the catalog holds fewer
    /// records than a full cycle; those days intentionally show nothing.
    pub fn window_at(&self, at: DateTime<Utc>, catalog_len: usize) -> DailyWindow {
        let cycle_position = self.cycle_position_at(at);
        let raw_start = cycle_position as usize * self.window_size;

        DailyWindow {
            date: at.date_naive(),
            cycle_position: cycle_position as u32,
            start: raw_start.min(catalog_len),
            end: (raw_start + self.window_size).min(catalog_len),
        }
    }
}

/// The contiguous slice of the catalog visible on a single UTC day
///
/// Re-derived on every request from the current instant; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyWindow {
    /// UTC calendar date the window was computed for
    pub date: NaiveDate,

    /// Day index within the repeating cycle, 0-based
    pub cycle_position: u32,

    /// First catalog index in the window
    pub start: usize,

    /// One past the last catalog index in the window
    pub end: usize,
}

impl DailyWindow {
    /// Number of records in the window
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// 1-based day number shown to clients
    pub fn day_in_cycle(&self) -> u32 {
        self.cycle_position + 1
    }

    /// Whether the record at `index` is visible today
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    /// The window as an index range into the ordered catalog
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Human-readable 1-based index range (e.g., "16-20"), or "None" when
    /// the window is empty
    pub fn range_label(&self) -> String {
        if self.is_empty() {
            "None".to_string()
        } else {
            format!("{}-{}", self.start + 1, self.end)
        }
    }
}
