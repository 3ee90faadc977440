//! Follow-up scheduling
//!
//! Derives the next recommended screening date and whether follow-up is
//! needed from the latest classification and the time elapsed since it.
//! "Now" is always an explicit parameter so scheduling stays deterministic
//! under test.

use crate::algorithm::trend::TrendDirection;
use crate::models::{RiskClassification, RiskTier, UrgencyLevel};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Days until re-screening for high and critical tiers
pub const HIGH_RISK_INTERVAL_DAYS: i64 = 7;
/// Days until re-screening for the medium tier
pub const MEDIUM_RISK_INTERVAL_DAYS: i64 = 14;
/// Days until re-screening for low and no risk
pub const ROUTINE_INTERVAL_DAYS: i64 = 30;

/// Scheduling guidance derived from the latest screening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpPlan {
    /// When the patient should next be screened
    pub next_recommended_date: NaiveDate,
    /// Whether follow-up is currently called for
    pub follow_up_needed: bool,
    /// Priority of the follow-up
    pub priority: UrgencyLevel,
}

/// Re-screening interval for a risk tier
#[must_use]
pub const fn screening_interval_days(tier: RiskTier) -> i64 {
    match tier {
        RiskTier::High | RiskTier::Critical => HIGH_RISK_INTERVAL_DAYS,
        RiskTier::Medium => MEDIUM_RISK_INTERVAL_DAYS,
        RiskTier::Low | RiskTier::None => ROUTINE_INTERVAL_DAYS,
    }
}

/// Derive the follow-up plan from the latest classification
///
/// Follow-up is needed when more than 30 days have elapsed, when more than
/// 14 days have elapsed at an elevated tier, or unconditionally at high
/// and critical tiers. Priority mirrors the recommendation urgency,
/// escalated to high when a declining trend coincides with an elevated
/// tier.
#[must_use]
pub fn plan_follow_up(
    classification: &RiskClassification,
    last_screening: NaiveDateTime,
    now: NaiveDateTime,
    trend: Option<TrendDirection>,
) -> FollowUpPlan {
    let tier = classification.risk_tier;
    let days_since = (now - last_screening).num_days();

    let next_recommended_date =
        (last_screening + Duration::days(screening_interval_days(tier))).date();

    let follow_up_needed = days_since > 30
        || (days_since > 14 && tier.is_elevated())
        || matches!(tier, RiskTier::High | RiskTier::Critical);

    let mut priority = UrgencyLevel::for_tier(tier);
    if matches!(trend, Some(TrendDirection::Declining)) && tier.is_elevated() {
        priority = UrgencyLevel::High;
    }

    FollowUpPlan {
        next_recommended_date,
        follow_up_needed,
        priority,
    }
}
