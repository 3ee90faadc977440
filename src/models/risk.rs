//! Risk classification derived from a score vector
//!
//! The risk tier is a coarse clinical severity bucket derived from the
//! highest single symptom score in a screening. Tier thresholds are
//! monotonic in the highest score.

use crate::models::score::ScoreVector;
use crate::models::symptom::Symptom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Clinical risk tiers, ordered from no risk to critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    /// No reported symptom burden (highest score 0)
    None = 0,
    /// Mild burden (highest score 1-3)
    Low = 1,
    /// Moderate burden (highest score 4-6)
    Medium = 2,
    /// Severe burden (highest score 7-8)
    High = 3,
    /// Critical burden (highest score 9-10)
    Critical = 4,
}

impl RiskTier {
    /// Derive the risk tier from a highest symptom score
    ///
    /// Scores are validated to 0-10 upstream; the catch-all arm only ever
    /// sees 9 and 10.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => Self::None,
            1..=3 => Self::Low,
            4..=6 => Self::Medium,
            7..=8 => Self::High,
            _ => Self::Critical,
        }
    }

    /// Convert a numeric ordinal (0-4) to a `RiskTier`
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0 => Self::None,
            1 => Self::Low,
            2 => Self::Medium,
            3 => Self::High,
            _ => Self::Critical,
        }
    }

    /// Get the numeric ordinal for this tier (0=None .. 4=Critical)
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether this tier calls for closer follow-up than routine care
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::Medium | Self::High | Self::Critical)
    }

    /// Get a descriptive name for this tier
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Risk classification for a single screening
///
/// Derived from a [`ScoreVector`] and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskClassification {
    /// Highest single symptom score (0-10)
    pub highest_score: u8,
    /// Symptom contributing the highest score (lowest index wins ties)
    pub primary_symptom: Symptom,
    /// Risk tier derived from the highest score
    pub risk_tier: RiskTier,
}

impl RiskClassification {
    /// Derive the classification for a score vector
    #[must_use]
    pub fn from_scores(scores: &ScoreVector) -> Self {
        let highest_score = scores.highest();
        Self {
            highest_score,
            primary_symptom: scores.primary_symptom(),
            risk_tier: RiskTier::from_score(highest_score),
        }
    }
}
