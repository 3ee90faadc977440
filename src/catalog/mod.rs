//! Intervention protocol catalog
//!
//! This module holds the static clinical reference data: one intervention
//! protocol per ESAS symptom. The catalog is loaded once at startup,
//! validated to cover the full nine-symptom domain and never mutated at
//! runtime. A data-driven JSON form is supported so deployments can carry
//! a site-specific catalog revision.

mod defaults;

use crate::error::{Result, ScreeningError};
use crate::models::Symptom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad therapy modality of a protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TherapyType {
    /// Drug-based intervention
    Pharmacological,
    /// Nursing and behavioral intervention without drugs
    NonPharmacological,
    /// Combined drug and nursing intervention
    Combined,
}

impl TherapyType {
    /// Get a descriptive name for this therapy type
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Pharmacological => "Pharmacological",
            Self::NonPharmacological => "Non-pharmacological",
            Self::Combined => "Combined",
        }
    }
}

impl fmt::Display for TherapyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Static intervention protocol for one symptom
///
/// Read-only reference data; one catalog entry exists per symptom index,
/// fixed at initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionProtocol {
    /// Symptom this protocol applies to
    pub symptom: Symptom,
    /// Clinical label of the addressed problem
    pub diagnosis_label: String,
    /// Broad therapy modality
    pub therapy_type: TherapyType,
    /// Ordered intervention steps
    pub steps: Vec<String>,
    /// Implementation cadence
    pub frequency: String,
    /// Expected duration of the intervention
    pub duration: String,
    /// Criteria used to evaluate effectiveness
    pub evaluation_criteria: Vec<String>,
    /// Safety precautions to observe
    pub precautions: Vec<String>,
    /// Guideline and literature references
    pub references: Vec<String>,
}

/// Versioned, validated table of intervention protocols
///
/// Holds exactly one protocol per symptom. Constructed once via
/// [`ProtocolCatalog::builtin`] or [`ProtocolCatalog::from_json`] and then
/// only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolCatalog {
    version: String,
    entries: Vec<InterventionProtocol>,
}

impl ProtocolCatalog {
    /// The built-in catalog revision shipped with the crate
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            version: defaults::BUILTIN_CATALOG_VERSION.to_string(),
            entries: defaults::builtin_protocols(),
        }
    }

    /// Build a catalog from explicit entries, validating coverage
    pub fn from_entries(version: String, entries: Vec<InterventionProtocol>) -> Result<Self> {
        let catalog = Self { version, entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog from its JSON document form
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that every symptom has exactly one protocol
    fn validate(&self) -> Result<()> {
        if self.entries.len() != Symptom::COUNT {
            return Err(ScreeningError::InvalidCatalog(format!(
                "expected {} protocols, found {}",
                Symptom::COUNT,
                self.entries.len()
            )));
        }
        for symptom in Symptom::ALL {
            let count = self
                .entries
                .iter()
                .filter(|p| p.symptom == symptom)
                .count();
            if count != 1 {
                return Err(ScreeningError::InvalidCatalog(format!(
                    "symptom '{symptom}' has {count} protocols, expected exactly 1"
                )));
            }
        }
        Ok(())
    }

    /// Look up the protocol for a symptom
    ///
    /// A missing entry indicates a catalog defect and fails loudly rather
    /// than substituting a default.
    pub fn get(&self, symptom: Symptom) -> Result<&InterventionProtocol> {
        self.entries
            .iter()
            .find(|p| p.symptom == symptom)
            .ok_or(ScreeningError::MissingProtocol(symptom))
    }

    /// The catalog revision identifier
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Iterate over all protocols in the catalog
    pub fn entries(&self) -> impl Iterator<Item = &InterventionProtocol> {
        self.entries.iter()
    }
}

impl Default for ProtocolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
