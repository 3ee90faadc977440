//! Logging utilities
//!
//! This module provides standardized logging setup and helpers for
//! screening operations.

/// Initialize env_logger with an `info` default filter
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
}

/// Log completion of a per-patient analysis with consistent format
///
/// # Arguments
/// * `patient_id` - The analyzed patient
/// * `records` - Number of records processed
/// * `elapsed` - Optional elapsed time
pub fn log_analysis_complete(
    patient_id: &str,
    records: usize,
    elapsed: Option<std::time::Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!("Analyzed {records} screenings for {patient_id} in {duration:?}");
    } else {
        log::info!("Analyzed {records} screenings for {patient_id}");
    }
}

/// Log a screening warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `patient_id` - Optional patient the warning relates to
pub fn log_warning(message: &str, patient_id: Option<&str>) {
    if let Some(patient_id) = patient_id {
        log::warn!("{patient_id}: {message}");
    } else {
        log::warn!("{message}");
    }
}
