//! High-level screening facade
//!
//! `Screener` bundles the protocol catalog and analytics configuration so
//! a collaborator holds one handle for the whole pipeline: submission →
//! classification → recommendation, plus history analytics and follow-up
//! planning.

use crate::algorithm::classify::{classify_scores, normalize_scores};
use crate::algorithm::followup::{FollowUpPlan, plan_follow_up};
use crate::algorithm::recommend::recommend;
use crate::algorithm::statistics::{HistoryStatistics, aggregate_statistics};
use crate::algorithm::trend::{
    TrendResult, analyze_trend, highest_score_series, risk_tier_series, symptom_series,
};
use crate::catalog::ProtocolCatalog;
use crate::config::ScreeningConfig;
use crate::error::Result;
use crate::models::{
    Recommendation, RiskClassification, ScreeningRecord, Symptom,
};
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Screening pipeline facade holding the catalog and configuration
#[derive(Debug, Clone, Default)]
pub struct Screener {
    catalog: ProtocolCatalog,
    config: ScreeningConfig,
}

impl Screener {
    /// Create a screener with the built-in catalog and default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a screener with a custom configuration
    #[must_use]
    pub fn with_config(config: ScreeningConfig) -> Self {
        Self {
            catalog: ProtocolCatalog::builtin(),
            config,
        }
    }

    /// Create a screener with a custom catalog and configuration
    #[must_use]
    pub const fn with_catalog(catalog: ProtocolCatalog, config: ScreeningConfig) -> Self {
        Self { catalog, config }
    }

    /// The protocol catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &ProtocolCatalog {
        &self.catalog
    }

    /// The analytics configuration in use
    #[must_use]
    pub const fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Classify a raw submission into a risk classification and recommendation
    pub fn classify(
        &self,
        raw: &HashMap<usize, i32>,
    ) -> Result<(RiskClassification, Recommendation)> {
        let scores = normalize_scores(raw)?;
        let classification = classify_scores(&scores);
        let recommendation = recommend(&classification, &self.catalog)?;
        Ok((classification, recommendation))
    }

    /// Run the full pipeline for one submission, producing a storable record
    pub fn screen(
        &self,
        patient_id: &str,
        raw: &HashMap<usize, i32>,
        recorded_at: Option<NaiveDateTime>,
    ) -> Result<ScreeningRecord> {
        let scores = normalize_scores(raw)?;
        let classification = classify_scores(&scores);
        let recommendation = recommend(&classification, &self.catalog)?;
        Ok(ScreeningRecord::new(
            patient_id.to_string(),
            recorded_at,
            scores,
            classification,
            recommendation,
        ))
    }

    /// Aggregate history statistics for one patient's records
    #[must_use]
    pub fn history_statistics(
        &self,
        records: &[ScreeningRecord],
        now: NaiveDateTime,
    ) -> HistoryStatistics {
        aggregate_statistics(records, now, &self.config)
    }

    /// Trend of the overall highest score across a history
    #[must_use]
    pub fn overall_trend(&self, records: &[ScreeningRecord]) -> TrendResult {
        analyze_trend(&highest_score_series(records))
    }

    /// Trend of one symptom's scores across a history
    #[must_use]
    pub fn symptom_trend(&self, records: &[ScreeningRecord], symptom: Symptom) -> TrendResult {
        analyze_trend(&symptom_series(records, symptom))
    }

    /// Trend of the risk tier (as an ordinal) across a history
    #[must_use]
    pub fn risk_trend(&self, records: &[ScreeningRecord]) -> TrendResult {
        analyze_trend(&risk_tier_series(records))
    }

    /// Plan follow-up from the latest dated record in a history
    ///
    /// Returns `None` when the history holds no dated record to schedule
    /// from. The overall score trend feeds the priority escalation rule.
    #[must_use]
    pub fn follow_up(
        &self,
        records: &[ScreeningRecord],
        now: NaiveDateTime,
    ) -> Option<FollowUpPlan> {
        let latest = records.iter().rev().find(|r| r.is_dated())?;
        let last_screening = latest.recorded_at?;
        let trend = self.overall_trend(records);
        Some(plan_follow_up(
            &latest.classification,
            last_screening,
            now,
            Some(trend.direction),
        ))
    }
}
