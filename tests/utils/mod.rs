//! Shared helpers for the test suite

use chrono::{NaiveDate, NaiveDateTime};
use esas_screener::{Screener, ScreeningRecord};
use std::collections::HashMap;

/// Build a noon timestamp for the given calendar date
#[must_use]
pub fn datetime(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Build a raw submission from (symptom index, value) pairs
#[must_use]
pub fn submission(pairs: &[(usize, i32)]) -> HashMap<usize, i32> {
    pairs.iter().copied().collect()
}

/// Screen a record whose highest score is carried by the Pain item
#[must_use]
pub fn record_with_highest(
    screener: &Screener,
    patient_id: &str,
    recorded_at: Option<NaiveDateTime>,
    highest: i32,
) -> ScreeningRecord {
    screener
        .screen(patient_id, &submission(&[(1, highest)]), recorded_at)
        .unwrap()
}
