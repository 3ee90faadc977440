//! A Rust library for ESAS symptom screening: converts nine-item symptom
//! questionnaires into risk classifications and structured care
//! recommendations, and analyzes how a patient's symptoms evolve across
//! repeated screenings.

pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod screener;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ScreeningConfig;
pub use error::{Result, ScreeningError};
pub use screener::Screener;

// Model types
pub use models::{
    MAX_SCORE, Recommendation, RiskClassification, RiskTier, ScoreVector, ScreeningCollection,
    ScreeningRecord, Symptom, UrgencyLevel,
};

// Catalog reference data
pub use catalog::{InterventionProtocol, ProtocolCatalog, TherapyType};

// Classification pipeline
pub use algorithm::classify::{classify_scores, normalize_scores};
pub use algorithm::recommend::recommend;

// History analytics
pub use algorithm::followup::{FollowUpPlan, plan_follow_up};
pub use algorithm::statistics::{
    HistoryStatistics, RiskDistribution, ScreeningFrequency, aggregate_statistics,
    generate_summary,
};
pub use algorithm::trend::{
    TrendDirection, TrendPoint, TrendResult, analyze_trend, highest_score_series,
    risk_tier_series, symptom_series,
};

// Parallel batch helpers
pub use algorithm::batch::{aggregate_all, classify_batch, trend_overview};
