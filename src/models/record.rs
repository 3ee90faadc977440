//! Screening record entity
//!
//! A `ScreeningRecord` is the unit stored per assessment event: the raw
//! scores together with the classification and recommendation derived from
//! them. Records are append-only over a patient's lifetime and ordered by
//! timestamp.

use crate::models::recommendation::Recommendation;
use crate::models::risk::RiskClassification;
use crate::models::score::ScoreVector;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One completed screening for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRecord {
    /// Identifier of the screened patient
    pub patient_id: String,
    /// When the screening was recorded.
    ///
    /// `None` marks a record whose timestamp was missing or unparseable in
    /// the upstream store; such records still count toward risk
    /// distributions but are skipped by date-based analytics.
    pub recorded_at: Option<NaiveDateTime>,
    /// The submitted symptom scores
    pub scores: ScoreVector,
    /// Classification derived from the scores
    pub classification: RiskClassification,
    /// Recommendation derived from the classification
    pub recommendation: Recommendation,
}

impl ScreeningRecord {
    /// Create a new screening record
    #[must_use]
    pub const fn new(
        patient_id: String,
        recorded_at: Option<NaiveDateTime>,
        scores: ScoreVector,
        classification: RiskClassification,
        recommendation: Recommendation,
    ) -> Self {
        Self {
            patient_id,
            recorded_at,
            scores,
            classification,
            recommendation,
        }
    }

    /// Whether this record carries a usable timestamp
    #[must_use]
    pub const fn is_dated(&self) -> bool {
        self.recorded_at.is_some()
    }
}
