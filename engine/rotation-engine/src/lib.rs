//! # RotationEngine
//!
//! Deterministic daily rotation over the ordered blog catalog.
//!
//! The rotation is a pure function of the current UTC instant and the
//! catalog size: whole days elapsed since a fixed reference epoch select a
//! position in a repeating 7-day cycle, and each position maps to a
//! contiguous 5-record slice of the catalog. No cursor is persisted and no
//! scheduler advances anything; the same instant and catalog always produce
//! the same window.

pub mod schedule;

#[cfg(test)]
mod tests;

pub use schedule::{DailyWindow, RotationSchedule};

use chrono::NaiveDate;

/// Current version of the RotationEngine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Days in one full rotation cycle
pub const CYCLE_DAYS: i64 = 7;

/// Records revealed per cycle day
pub const WINDOW_SIZE: usize = 5;

/// First day of the rotation (2025-01-01, UTC)
pub const REFERENCE_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(date) => date,
    None => panic!("invalid reference epoch"),
};
