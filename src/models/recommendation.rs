//! Care recommendation derived from a risk classification
//!
//! A recommendation pairs the intervention protocol selected by the primary
//! symptom with an urgency level and scheduling advice modulated by the
//! risk tier.

use crate::catalog::InterventionProtocol;
use crate::models::risk::RiskTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of implementing a recommended intervention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UrgencyLevel {
    /// Supportive care, monthly evaluation
    Low = 1,
    /// Routine implementation, weekly evaluation
    Medium = 2,
    /// Immediate implementation, evaluation within 24 hours
    High = 3,
}

impl UrgencyLevel {
    /// Map a risk tier onto the three-level urgency scale
    #[must_use]
    pub const fn for_tier(tier: RiskTier) -> Self {
        match tier {
            RiskTier::Critical | RiskTier::High => Self::High,
            RiskTier::Medium => Self::Medium,
            RiskTier::Low | RiskTier::None => Self::Low,
        }
    }

    /// Get a descriptive name for this urgency level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Structured care recommendation for a single screening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The intervention protocol selected by the primary symptom
    pub protocol: InterventionProtocol,
    /// Urgency of implementing the protocol
    pub urgency: UrgencyLevel,
    /// Human-readable implementation and evaluation cadence
    pub frequency_advice: String,
    /// Escalation and referral notes appended by severity rules
    pub additional_notes: Vec<String>,
}
