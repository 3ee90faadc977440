//! Trend detection over screening series
//!
//! Fits an ordinary least-squares line of score against sequence index and
//! classifies the slope. Lower ESAS scores mean less symptom burden, so a
//! negative slope is an improving trend. The same routine serves the
//! overall highest-score series, each per-symptom series and the risk-tier
//! ordinal series.

use crate::models::{ScreeningRecord, Symptom};
use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slope below which a series counts as improving
pub const IMPROVING_SLOPE: f64 = -0.1;
/// Slope above which a series counts as declining
pub const DECLINING_SLOPE: f64 = 0.1;

/// Direction of change across a score series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    /// Scores are decreasing over time (less symptom burden)
    Improving,
    /// Scores are increasing over time (more symptom burden)
    Declining,
    /// No meaningful change detected
    Stable,
}

impl TrendDirection {
    /// Get a descriptive name for this direction
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Declining => "Declining",
            Self::Stable => "Stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// One sample of a time-ordered score series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// When the sample was recorded
    pub recorded_at: NaiveDateTime,
    /// The sampled value
    pub value: f64,
}

/// Result of trend analysis over one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Detected direction of change
    pub direction: TrendDirection,
    /// Strength of the detected trend, bounded to [0, 100]
    pub confidence: f64,
    /// The analyzed series, ascending by timestamp
    pub points: Vec<TrendPoint>,
}

/// Analyze the trend of a time-ordered series
///
/// Fewer than two points is a defined output state, not an error: the
/// series is reported stable with zero confidence. Otherwise the OLS slope
/// of value against sequence index 0..n-1 classifies the direction, and
/// confidence is `min(|slope| * 10, 100)`.
#[must_use]
pub fn analyze_trend(points: &[TrendPoint]) -> TrendResult {
    if points.len() < 2 {
        return TrendResult {
            direction: TrendDirection::Stable,
            confidence: 0.0,
            points: points.to_vec(),
        };
    }

    let slope = regression_slope(points);
    let direction = if slope < IMPROVING_SLOPE {
        TrendDirection::Improving
    } else if slope > DECLINING_SLOPE {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    TrendResult {
        direction,
        confidence: (slope.abs() * 10.0).min(100.0),
        points: points.to_vec(),
    }
}

/// OLS slope of value against sequence index
fn regression_slope(points: &[TrendPoint]) -> f64 {
    let n = points.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, point) in points.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += point.value;
        sum_xy += x * point.value;
        sum_xx += x * x;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return 0.0;
    }
    (n * sum_xy - sum_x * sum_y) / denominator
}

/// Extract the overall highest-score series from a history
#[must_use]
pub fn highest_score_series(records: &[ScreeningRecord]) -> Vec<TrendPoint> {
    extract_series(records, |r| f64::from(r.classification.highest_score))
}

/// Extract the series for one symptom from a history
#[must_use]
pub fn symptom_series(records: &[ScreeningRecord], symptom: Symptom) -> Vec<TrendPoint> {
    extract_series(records, move |r| f64::from(r.scores.get(symptom)))
}

/// Extract the risk-tier ordinal series from a history
///
/// Tiers map to their ordinals (Low=1 .. Critical=4, None=0) so the risk
/// trend can be expressed independently of the raw score trend.
#[must_use]
pub fn risk_tier_series(records: &[ScreeningRecord]) -> Vec<TrendPoint> {
    extract_series(records, |r| f64::from(r.classification.risk_tier.ordinal()))
}

fn extract_series<F>(records: &[ScreeningRecord], value: F) -> Vec<TrendPoint>
where
    F: Fn(&ScreeningRecord) -> f64,
{
    let mut points: Vec<TrendPoint> = records
        .iter()
        .filter_map(|record| match record.recorded_at {
            Some(recorded_at) => Some(TrendPoint {
                recorded_at,
                value: value(record),
            }),
            None => {
                debug!(
                    "skipping undated screening record for patient {} in trend series",
                    record.patient_id
                );
                None
            }
        })
        .collect();
    points.sort_by_key(|p| p.recorded_at);
    points
}
