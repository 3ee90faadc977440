//! Per-screening symptom score vector
//!
//! A screening submission is a complete set of nine integer scores, one per
//! ESAS item, each in the range 0 (no symptom) to 10 (worst possible). The
//! domain is closed and fixed, so scores are held in a fixed-size array
//! rather than an open-ended map.

use crate::error::{Result, ScreeningError};
use crate::models::symptom::Symptom;
use serde::{Deserialize, Serialize};

/// Maximum score for a single ESAS item
pub const MAX_SCORE: u8 = 10;

/// Complete set of nine symptom scores for one screening
///
/// Immutable once created; classification and analytics only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreVector([u8; Symptom::COUNT]);

impl ScoreVector {
    /// Create a score vector from an array ordered by symptom index
    ///
    /// Every entry must lie in 0-10; an out-of-range entry is rejected with
    /// the offending symptom index.
    pub fn new(scores: [u8; Symptom::COUNT]) -> Result<Self> {
        for (i, &score) in scores.iter().enumerate() {
            if score > MAX_SCORE {
                return Err(ScreeningError::ScoreOutOfRange {
                    symptom: i + 1,
                    value: i32::from(score),
                });
            }
        }
        Ok(Self(scores))
    }

    /// A vector with every symptom scored 0
    #[must_use]
    pub const fn zeroed() -> Self {
        Self([0; Symptom::COUNT])
    }

    /// Get the score for one symptom
    #[must_use]
    pub const fn get(&self, symptom: Symptom) -> u8 {
        self.0[symptom.index() - 1]
    }

    /// Iterate over (symptom, score) pairs in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (Symptom, u8)> + '_ {
        Symptom::ALL.iter().map(move |&symptom| (symptom, self.get(symptom)))
    }

    /// The highest single score in the vector
    #[must_use]
    pub fn highest(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// The symptom contributing the highest score
    ///
    /// Ties break toward the lowest symptom index, i.e. the clinically
    /// earliest listed item.
    #[must_use]
    pub fn primary_symptom(&self) -> Symptom {
        let highest = self.highest();
        for (symptom, score) in self.iter() {
            if score == highest {
                return symptom;
            }
        }
        // The vector always has nine entries, so the scan always returns
        Symptom::Pain
    }

    /// Total symptom distress score (sum of all nine items)
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&s| u32::from(s)).sum()
    }

    /// The raw scores as an array ordered by symptom index
    #[must_use]
    pub const fn as_array(&self) -> [u8; Symptom::COUNT] {
        self.0
    }
}
