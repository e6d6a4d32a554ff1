//! Unit tests for the rotation schedule

use crate::{RotationSchedule, CYCLE_DAYS, REFERENCE_EPOCH, WINDOW_SIZE};
use chrono::{DateTime, TimeZone, Utc};

fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

#[test]
fn test_constants() {
    assert_eq!(CYCLE_DAYS, 7);
    assert_eq!(WINDOW_SIZE, 5);
    assert_eq!(REFERENCE_EPOCH.to_string(), "2025-01-01");
}

#[test]
fn test_elapsed_days_truncate_partial_days() {
    let schedule = RotationSchedule::default();

    assert_eq!(schedule.elapsed_days_at(utc(2025, 1, 1, 0)), 0);
    // Late in the first day is still day zero
    assert_eq!(schedule.elapsed_days_at(utc(2025, 1, 1, 23)), 0);
    assert_eq!(schedule.elapsed_days_at(utc(2025, 1, 2, 0)), 1);
    assert_eq!(schedule.elapsed_days_at(utc(2025, 1, 11, 12)), 10);
}

#[test]
fn test_cycle_position_stays_in_range() {
    let schedule = RotationSchedule::default();

    // A full year of days, every position in [0, 6]
    for offset in 0..365 {
        let at = utc(2025, 1, 1, 9) + chrono::Duration::days(offset);
        let position = schedule.cycle_position_at(at);
        assert!((0..7).contains(&position), "position {position} out of range at offset {offset}");
    }

    // The cycle restarts after day 7
    assert_eq!(schedule.cycle_position_at(utc(2025, 1, 1, 0)), 0);
    assert_eq!(schedule.cycle_position_at(utc(2025, 1, 7, 0)), 6);
    assert_eq!(schedule.cycle_position_at(utc(2025, 1, 8, 0)), 0);
}

#[test]
fn test_cycle_position_before_epoch() {
    let schedule = RotationSchedule::default();

    // Instants before the epoch still land in [0, 6]
    for offset in 1..30 {
        let at = utc(2025, 1, 1, 9) - chrono::Duration::days(offset);
        let position = schedule.cycle_position_at(at);
        assert!((0..7).contains(&position));
    }
}

#[test]
fn test_window_ten_days_after_epoch() {
    let schedule = RotationSchedule::default();

    // elapsed_days = 10 -> cycle position 3 -> indices [15, 20)
    let window = schedule.window_at(utc(2025, 1, 11, 15), 35);
    assert_eq!(window.cycle_position, 3);
    assert_eq!(window.day_in_cycle(), 4);
    assert_eq!(window.start, 15);
    assert_eq!(window.end, 20);
    assert_eq!(window.len(), 5);
    assert!(window.contains(15));
    assert!(window.contains(19));
    assert!(!window.contains(20));
    assert_eq!(window.range_label(), "16-20");
}

#[test]
fn test_window_clamps_to_catalog_length() {
    let schedule = RotationSchedule::default();

    // Position 6 with 33 records: [30, 33), length 3 rather than 5
    let at = utc(2025, 1, 7, 8);
    assert_eq!(schedule.cycle_position_at(at), 6);
    let window = schedule.window_at(at, 33);
    assert_eq!(window.start, 30);
    assert_eq!(window.end, 33);
    assert_eq!(window.len(), 3);
    assert_eq!(window.range_label(), "31-33");
}

#[test]
fn test_window_past_catalog_end_is_empty() {
    let schedule = RotationSchedule::default();

    // Position 6 needs indices from 30 up; a 12-record catalog has none
    let window = schedule.window_at(utc(2025, 1, 7, 8), 12);
    assert!(window.is_empty());
    assert_eq!(window.len(), 0);
    assert_eq!(window.range_label(), "None");
    assert!(!window.contains(0));
}

#[test]
fn test_window_on_empty_catalog() {
    let schedule = RotationSchedule::default();

    let window = schedule.window_at(utc(2025, 1, 3, 12), 0);
    assert!(window.is_empty());
    assert_eq!(window.range(), 0..0);
    assert_eq!(window.range_label(), "None");
}

#[test]
fn test_window_is_idempotent_within_a_day() {
    let schedule = RotationSchedule::default();

    let morning = schedule.window_at(utc(2025, 3, 9, 1), 35);
    let evening = schedule.window_at(utc(2025, 3, 9, 23), 35);
    assert_eq!(morning, evening);

    // And advances by one position the next day
    let next_day = schedule.window_at(utc(2025, 3, 10, 1), 35);
    assert_eq!(next_day.cycle_position, (morning.cycle_position + 1) % 7);
}

#[test]
fn test_full_cycle_covers_catalog_of_35() {
    let schedule = RotationSchedule::default();

    // Seven consecutive days tile the 35-record catalog exactly
    let mut covered = Vec::new();
    for offset in 0..7 {
        let at = utc(2025, 1, 1, 12) + chrono::Duration::days(offset);
        let window = schedule.window_at(at, 35);
        assert_eq!(window.len(), 5);
        covered.extend(window.range());
    }
    assert_eq!(covered, (0..35).collect::<Vec<_>>());
}

#[test]
fn test_custom_schedule_parameters() {
    let schedule = RotationSchedule::new(REFERENCE_EPOCH, 3, 2);

    let window = schedule.window_at(utc(2025, 1, 3, 0), 10);
    assert_eq!(window.cycle_position, 2);
    assert_eq!(window.range(), 4..6);
    assert_eq!(window.range_label(), "5-6");
}
