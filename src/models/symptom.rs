//! The fixed ESAS symptom domain
//!
//! This module defines the nine symptom items of the Edmonton Symptom
//! Assessment System (revised ordering), which form the closed index domain
//! for every score vector and protocol lookup in the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine ESAS-r symptom items, in questionnaire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symptom {
    /// Pain (item 1)
    Pain = 1,
    /// Tiredness (item 2)
    Tiredness = 2,
    /// Drowsiness (item 3)
    Drowsiness = 3,
    /// Nausea (item 4)
    Nausea = 4,
    /// Lack of appetite (item 5)
    AppetiteLoss = 5,
    /// Shortness of breath (item 6)
    ShortnessOfBreath = 6,
    /// Depression (item 7)
    Depression = 7,
    /// Anxiety (item 8)
    Anxiety = 8,
    /// Overall wellbeing (item 9)
    Wellbeing = 9,
}

impl Symptom {
    /// Number of items in the questionnaire
    pub const COUNT: usize = 9;

    /// All symptoms in ascending index order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Pain,
        Self::Tiredness,
        Self::Drowsiness,
        Self::Nausea,
        Self::AppetiteLoss,
        Self::ShortnessOfBreath,
        Self::Depression,
        Self::Anxiety,
        Self::Wellbeing,
    ];

    /// Convert a 1-based questionnaire index to a `Symptom`
    ///
    /// Returns `None` for indices outside the fixed 1-9 domain.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Self::Pain),
            2 => Some(Self::Tiredness),
            3 => Some(Self::Drowsiness),
            4 => Some(Self::Nausea),
            5 => Some(Self::AppetiteLoss),
            6 => Some(Self::ShortnessOfBreath),
            7 => Some(Self::Depression),
            8 => Some(Self::Anxiety),
            9 => Some(Self::Wellbeing),
            _ => None,
        }
    }

    /// Get the 1-based questionnaire index for this symptom
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the display name for this symptom
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Pain => "Pain",
            Self::Tiredness => "Tiredness",
            Self::Drowsiness => "Drowsiness",
            Self::Nausea => "Nausea",
            Self::AppetiteLoss => "Lack of Appetite",
            Self::ShortnessOfBreath => "Shortness of Breath",
            Self::Depression => "Depression",
            Self::Anxiety => "Anxiety",
            Self::Wellbeing => "Wellbeing",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
