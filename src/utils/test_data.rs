//! Synthetic screening data generation
//!
//! Deterministic fixtures for tests and demos: seeded random submissions
//! and whole synthetic histories with a configurable symptom drift.

use crate::error::Result;
use crate::models::{ScreeningRecord, Symptom};
use crate::screener::Screener;
use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Deterministic RNG for reproducible fixtures
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A random complete submission with every symptom scored 0-10
pub fn random_submission(rng: &mut impl Rng) -> HashMap<usize, i32> {
    (1..=Symptom::COUNT)
        .map(|index| (index, rng.random_range(0..=10)))
        .collect()
}

/// Generate a synthetic screening history for one patient
///
/// Each visit drifts every symptom by `drift_per_visit` (negative values
/// simulate an improving patient) with ±1 noise, clamped to the valid
/// score range. Visits are spaced `interval_days` apart starting at
/// `start`.
pub fn synthetic_history(
    screener: &Screener,
    patient_id: &str,
    visits: usize,
    start: NaiveDateTime,
    interval_days: i64,
    drift_per_visit: i32,
    rng: &mut impl Rng,
) -> Result<Vec<ScreeningRecord>> {
    let baseline: Vec<i32> = (0..Symptom::COUNT).map(|_| rng.random_range(2..=8)).collect();

    let mut records = Vec::with_capacity(visits);
    for visit in 0..visits {
        let submission: HashMap<usize, i32> = baseline
            .iter()
            .enumerate()
            .map(|(i, &base)| {
                let noise = rng.random_range(-1..=1);
                let value = (base + drift_per_visit * visit as i32 + noise).clamp(0, 10);
                (i + 1, value)
            })
            .collect();

        let recorded_at = start + Duration::days(interval_days * visit as i64);
        records.push(screener.screen(patient_id, &submission, Some(recorded_at))?);
    }

    Ok(records)
}
