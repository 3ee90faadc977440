//! History statistics and summaries
//!
//! This module provides the pure reductions over a patient's screening
//! history: risk distribution, screening cadence, score variability and
//! improvement rate, plus a human-readable summary for logs and reports.

use crate::config::ScreeningConfig;
use crate::models::{RiskTier, ScreeningRecord};
use chrono::{Datelike, NaiveDateTime};
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

/// Count of screenings per risk tier
///
/// The tier domain is closed, so counts live in a fixed struct rather than
/// an open map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    /// Screenings classified as no risk
    pub none: usize,
    /// Screenings classified low risk
    pub low: usize,
    /// Screenings classified medium risk
    pub medium: usize,
    /// Screenings classified high risk
    pub high: usize,
    /// Screenings classified critical risk
    pub critical: usize,
}

impl RiskDistribution {
    /// Record one screening at the given tier
    pub const fn record(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::None => self.none += 1,
            RiskTier::Low => self.low += 1,
            RiskTier::Medium => self.medium += 1,
            RiskTier::High => self.high += 1,
            RiskTier::Critical => self.critical += 1,
        }
    }

    /// Count for one tier
    #[must_use]
    pub const fn count(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::None => self.none,
            RiskTier::Low => self.low,
            RiskTier::Medium => self.medium,
            RiskTier::High => self.high,
            RiskTier::Critical => self.critical,
        }
    }

    /// Total screenings counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.none + self.low + self.medium + self.high + self.critical
    }
}

/// Screening cadence measures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningFrequency {
    /// Screenings recorded in the current calendar month
    pub this_month: usize,
    /// Screenings recorded in the prior calendar month
    pub last_month: usize,
    /// Screenings per 30 days over the full history span
    pub average_per_month: i64,
}

/// Distributional and cadence statistics over one patient's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStatistics {
    /// Count of screenings per risk tier
    pub risk_distribution: RiskDistribution,
    /// Screening cadence measures
    pub frequency: ScreeningFrequency,
    /// Population standard deviation of the highest-score series
    pub variability: f64,
    /// Relative change from first to last highest score, in percent
    pub improvement_rate_pct: f64,
    /// Whole days between the first and last dated screenings
    pub span_days: i64,
    /// Longest run of consecutive screenings each within the streak window
    pub screening_streak: usize,
    /// Largest day gap between two consecutive dated screenings
    pub longest_gap_days: i64,
    /// Number of records actually aggregated
    pub samples_used: usize,
    /// Whether the history was truncated to the configured cap
    pub truncated: bool,
}

/// Aggregate history statistics for one patient
///
/// Pure reduction over the record list; running it twice on the same input
/// yields identical output. Records without a usable timestamp count
/// toward the risk distribution but are skipped by every date-based
/// measure, since one malformed record must not hide statistics for the
/// rest of the history.
#[must_use]
pub fn aggregate_statistics(
    records: &[ScreeningRecord],
    now: NaiveDateTime,
    config: &ScreeningConfig,
) -> HistoryStatistics {
    // Degrade gracefully on oversized histories: analyze the most recent
    // records and flag the truncation.
    let (window, truncated) = match config.max_history_samples {
        Some(cap) if records.len() > cap => (&records[records.len() - cap..], true),
        _ => (records, false),
    };

    let mut risk_distribution = RiskDistribution::default();
    for record in window {
        risk_distribution.record(record.classification.risk_tier);
    }

    let mut dated: Vec<&ScreeningRecord> = window.iter().filter(|r| r.is_dated()).collect();
    let skipped = window.len() - dated.len();
    if skipped > 0 && config.log_skipped_records {
        warn!("skipping {skipped} screening records without a usable timestamp");
    }
    dated.sort_by_key(|r| r.recorded_at);

    let timestamps: Vec<NaiveDateTime> = dated.iter().filter_map(|r| r.recorded_at).collect();

    let span_days = match (timestamps.first(), timestamps.last()) {
        (Some(first), Some(last)) => (*last - *first).num_days(),
        _ => 0,
    };

    let frequency = screening_frequency(&timestamps, span_days, now);
    let highest_scores: Vec<f64> = dated
        .iter()
        .map(|r| f64::from(r.classification.highest_score))
        .collect();

    let (screening_streak, longest_gap_days) =
        streak_and_gap(&timestamps, config.streak_window_days);

    HistoryStatistics {
        risk_distribution,
        frequency,
        variability: population_std_dev(&highest_scores),
        improvement_rate_pct: improvement_rate(&highest_scores),
        span_days,
        screening_streak,
        longest_gap_days,
        samples_used: window.len(),
        truncated,
    }
}

fn screening_frequency(
    timestamps: &[NaiveDateTime],
    span_days: i64,
    now: NaiveDateTime,
) -> ScreeningFrequency {
    let this = (now.year(), now.month());
    let last = if now.month() == 1 {
        (now.year() - 1, 12)
    } else {
        (now.year(), now.month() - 1)
    };

    let this_month = timestamps
        .iter()
        .filter(|t| (t.year(), t.month()) == this)
        .count();
    let last_month = timestamps
        .iter()
        .filter(|t| (t.year(), t.month()) == last)
        .count();

    let average_per_month = if span_days == 0 {
        0
    } else {
        (timestamps.len() as f64 / span_days as f64 * 30.0).round() as i64
    };

    ScreeningFrequency {
        this_month,
        last_month,
        average_per_month,
    }
}

/// Population standard deviation of a score series
#[must_use]
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Relative improvement from the first to the last score, in percent
///
/// Positive when the score decreased (less burden). Defined as 0 with
/// fewer than two samples or a first score of 0.
fn improvement_rate(scores: &[f64]) -> f64 {
    match (scores.first(), scores.last()) {
        (Some(&first), Some(&last)) if scores.len() >= 2 && first > 0.0 => {
            (first - last) / first * 100.0
        }
        _ => 0.0,
    }
}

/// Longest consecutive-screening streak and largest gap, both in the
/// ascending timestamp series
fn streak_and_gap(timestamps: &[NaiveDateTime], window_days: i64) -> (usize, i64) {
    if timestamps.len() < 2 {
        return (timestamps.len(), 0);
    }

    let mut longest_gap = 0i64;
    let mut current_run = 1usize;
    let mut best_run = 1usize;
    for (earlier, later) in timestamps.iter().tuple_windows() {
        let gap = (*later - *earlier).num_days();
        longest_gap = longest_gap.max(gap);
        if gap <= window_days {
            current_run += 1;
            best_run = best_run.max(current_run);
        } else {
            current_run = 1;
        }
    }

    (best_run, longest_gap)
}

/// Generate a human-readable history summary
#[must_use]
pub fn generate_summary(patient_id: &str, stats: &HistoryStatistics) -> String {
    let mut summary = String::new();
    summary.push_str("Screening History Summary:\n");
    summary.push_str(&format!("  Patient: {patient_id}\n"));
    summary.push_str(&format!("  Screenings Analyzed: {}", stats.samples_used));
    if stats.truncated {
        summary.push_str(" (truncated to the most recent records)");
    }
    summary.push('\n');

    summary.push_str("  Risk Distribution:\n");
    for tier in [
        RiskTier::None,
        RiskTier::Low,
        RiskTier::Medium,
        RiskTier::High,
        RiskTier::Critical,
    ] {
        let count = stats.risk_distribution.count(tier);
        let percentage = if stats.risk_distribution.total() > 0 {
            count as f64 / stats.risk_distribution.total() as f64 * 100.0
        } else {
            0.0
        };
        summary.push_str(&format!("    {tier}: {count} ({percentage:.1}%)\n"));
    }

    summary.push_str(&format!(
        "  Frequency: {} this month, {} last month, {} per month on average\n",
        stats.frequency.this_month, stats.frequency.last_month, stats.frequency.average_per_month
    ));
    summary.push_str(&format!("  Score Variability (SD): {:.2}\n", stats.variability));
    summary.push_str(&format!(
        "  Improvement Rate: {:.1}%\n",
        stats.improvement_rate_pct
    ));
    summary.push_str(&format!("  History Span: {} days\n", stats.span_days));
    summary.push_str(&format!(
        "  Longest Screening Streak: {} screenings\n",
        stats.screening_streak
    ));
    summary.push_str(&format!(
        "  Longest Gap: {} days\n",
        stats.longest_gap_days
    ));

    summary
}
