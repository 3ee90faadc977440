//! Score normalization and risk classification
//!
//! A raw submission arrives as a sparse map from symptom index to value.
//! Normalization produces a complete nine-entry score vector; classification
//! derives the highest score, primary symptom and risk tier from it.

use crate::error::{Result, ScreeningError};
use crate::models::{RiskClassification, ScoreVector, Symptom};
use std::collections::HashMap;

/// Sanitize a raw score submission into a complete score vector
///
/// Missing symptom indices default to 0. Values outside 0-10 are rejected
/// with the offending index rather than clamped, since a clamped value
/// would misrepresent clinical severity; the defect has to be corrected at
/// the point of data entry. Keys outside the fixed 1-9 domain are rejected
/// as unknown symptoms.
pub fn normalize_scores(raw: &HashMap<usize, i32>) -> Result<ScoreVector> {
    let mut scores = [0u8; Symptom::COUNT];
    for (&index, &value) in raw {
        let Some(symptom) = Symptom::from_index(index) else {
            return Err(ScreeningError::UnknownSymptom(index));
        };
        if !(0..=10).contains(&value) {
            return Err(ScreeningError::ScoreOutOfRange {
                symptom: index,
                value,
            });
        }
        scores[symptom.index() - 1] = value as u8;
    }
    ScoreVector::new(scores)
}

/// Classify a normalized score vector
///
/// The highest score selects the risk tier; the primary symptom is the
/// first index attaining the highest score when scanning 1..9 ascending,
/// which makes ties break deterministically toward the clinically earliest
/// listed item. Total function: a well-formed score vector always
/// classifies.
#[must_use]
pub fn classify_scores(scores: &ScoreVector) -> RiskClassification {
    RiskClassification::from_scores(scores)
}
