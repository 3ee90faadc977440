//! A collection of screening records that can be efficiently queried

use crate::models::record::ScreeningRecord;
use rustc_hash::FxHashMap;

/// Per-patient store of screening histories
///
/// Records are kept in ascending timestamp order per patient; undated
/// records sort after dated ones in their insertion order.
#[derive(Debug, Default, Clone)]
pub struct ScreeningCollection {
    records_by_patient: FxHashMap<String, Vec<ScreeningRecord>>,
}

impl ScreeningCollection {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            records_by_patient: FxHashMap::default(),
        }
    }

    /// Add a screening record, keeping the patient's history time-ordered
    pub fn add(&mut self, record: ScreeningRecord) {
        let records = self
            .records_by_patient
            .entry(record.patient_id.clone())
            .or_default();
        records.push(record);
        records.sort_by_key(|r| (r.recorded_at.is_none(), r.recorded_at));
    }

    /// Get the full ordered history for a patient
    ///
    /// Returns an empty slice for unknown patients.
    #[must_use]
    pub fn records(&self, patient_id: &str) -> &[ScreeningRecord] {
        self.records_by_patient
            .get(patient_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Get the most recent record for a patient
    #[must_use]
    pub fn latest(&self, patient_id: &str) -> Option<&ScreeningRecord> {
        let dated = self
            .records(patient_id)
            .iter()
            .rev()
            .find(|r| r.is_dated());
        dated.or_else(|| self.records(patient_id).last())
    }

    /// All patient identifiers in the collection
    #[must_use]
    pub fn patients(&self) -> Vec<&str> {
        self.records_by_patient.keys().map(String::as_str).collect()
    }

    /// Iterate over (patient, history) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScreeningRecord])> {
        self.records_by_patient
            .iter()
            .map(|(patient, records)| (patient.as_str(), records.as_slice()))
    }

    /// Number of patients with at least one record
    #[must_use]
    pub fn patient_count(&self) -> usize {
        self.records_by_patient.len()
    }

    /// Total number of records across all patients
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records_by_patient.values().map(Vec::len).sum()
    }

    /// Whether the collection holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records_by_patient.is_empty()
    }
}
