//! Parallel batch analytics
//!
//! Classification and aggregation are pure functions over independent
//! inputs, so work for different submissions or different patients is
//! embarrassingly parallel and distributes across the rayon pool with no
//! coordination.

use crate::algorithm::classify::{classify_scores, normalize_scores};
use crate::algorithm::recommend::recommend;
use crate::algorithm::statistics::{HistoryStatistics, aggregate_statistics};
use crate::algorithm::trend::{TrendResult, analyze_trend, highest_score_series};
use crate::catalog::ProtocolCatalog;
use crate::config::ScreeningConfig;
use crate::error::Result;
use crate::models::{Recommendation, RiskClassification, ScoreVector, ScreeningCollection};
use chrono::NaiveDateTime;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::HashMap;

/// Classify a batch of raw submissions in parallel
///
/// Output order matches input order; each submission succeeds or fails
/// independently.
pub fn classify_batch(
    submissions: &[HashMap<usize, i32>],
    catalog: &ProtocolCatalog,
) -> Vec<Result<(ScoreVector, RiskClassification, Recommendation)>> {
    submissions
        .par_iter()
        .map(|raw| {
            let scores = normalize_scores(raw)?;
            let classification = classify_scores(&scores);
            let recommendation = recommend(&classification, catalog)?;
            Ok((scores, classification, recommendation))
        })
        .collect()
}

/// Aggregate history statistics for every patient in a collection
#[must_use]
pub fn aggregate_all(
    collection: &ScreeningCollection,
    now: NaiveDateTime,
    config: &ScreeningConfig,
) -> FxHashMap<String, HistoryStatistics> {
    collection
        .patients()
        .par_iter()
        .map(|patient| {
            (
                (*patient).to_string(),
                aggregate_statistics(collection.records(patient), now, config),
            )
        })
        .collect()
}

/// Compute the overall highest-score trend for every patient
#[must_use]
pub fn trend_overview(collection: &ScreeningCollection) -> FxHashMap<String, TrendResult> {
    collection
        .patients()
        .par_iter()
        .map(|patient| {
            let series = highest_score_series(collection.records(patient));
            ((*patient).to_string(), analyze_trend(&series))
        })
        .collect()
}
