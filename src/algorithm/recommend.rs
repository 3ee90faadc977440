//! Recommendation mapping
//!
//! Maps a risk classification onto the intervention protocol for its
//! primary symptom, modulating urgency and evaluation cadence by risk tier.

use crate::catalog::ProtocolCatalog;
use crate::error::Result;
use crate::models::{Recommendation, RiskClassification, RiskTier, UrgencyLevel};

/// Highest score at which an immediate care-facility referral is advised
pub const REFERRAL_SCORE: u8 = 7;
/// Highest score at which contacting a care facility is advised
pub const CONTACT_SCORE: u8 = 4;

/// Derive the care recommendation for a classification
///
/// Pure function over the classification and the read-only catalog. A
/// missing protocol entry is a catalog defect and surfaces as an error
/// rather than a substituted default.
pub fn recommend(
    classification: &RiskClassification,
    catalog: &ProtocolCatalog,
) -> Result<Recommendation> {
    let protocol = catalog.get(classification.primary_symptom)?.clone();
    let urgency = UrgencyLevel::for_tier(classification.risk_tier);

    let frequency_advice = match urgency {
        UrgencyLevel::High => "implement immediately, evaluate within 24 hours",
        UrgencyLevel::Medium => "implement routinely, evaluate within 1 week",
        UrgencyLevel::Low => "implement as supportive care, evaluate monthly",
    }
    .to_string();

    let mut additional_notes = Vec::new();
    if matches!(
        classification.risk_tier,
        RiskTier::High | RiskTier::Critical
    ) {
        additional_notes.push(
            "Escalate to the responsible physician and reassess the care plan within 24 hours"
                .to_string(),
        );
    }
    if classification.highest_score >= REFERRAL_SCORE {
        additional_notes.push("Refer to a care facility immediately".to_string());
    } else if classification.highest_score >= CONTACT_SCORE {
        additional_notes.push("Contact a care facility for further evaluation".to_string());
    }

    Ok(Recommendation {
        protocol,
        urgency,
        frequency_advice,
        additional_notes,
    })
}
