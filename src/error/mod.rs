//! Error handling for the screening core.

use crate::models::Symptom;

/// Errors that can occur during screening classification and catalog handling
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    /// A submitted score lies outside the valid 0-10 range.
    ///
    /// Out-of-range scores are rejected rather than clamped; a clamped value
    /// would misrepresent clinical severity and has to be corrected at the
    /// point of data entry.
    #[error("score {value} for symptom {symptom} is outside the valid range 0-10")]
    ScoreOutOfRange {
        /// Index (1-9) of the offending symptom
        symptom: usize,
        /// The rejected raw value
        value: i32,
    },

    /// A submission referenced a symptom index outside the fixed 1-9 domain
    #[error("symptom index {0} is outside the fixed 1-9 ESAS domain")]
    UnknownSymptom(usize),

    /// No intervention protocol is registered for a symptom.
    ///
    /// The catalog is fixed reference data covering all nine symptoms, so
    /// this indicates a catalog defect and is unrecoverable.
    #[error("no intervention protocol registered for symptom '{0}'")]
    MissingProtocol(Symptom),

    /// A protocol catalog failed validation at load time
    #[error("invalid protocol catalog: {0}")]
    InvalidCatalog(String),

    /// A protocol catalog document could not be parsed
    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, ScreeningError>;
