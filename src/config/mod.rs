//! Configuration for the screening analytics.

/// Configuration for history analytics
///
/// The classification rules themselves are fixed clinical semantics; this
/// struct only carries the knobs a hosting service may need to tune, such as
/// the history truncation cap used to bound analysis cost per request.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Maximum number of history records to aggregate per patient.
    ///
    /// When a patient's history exceeds the cap, only the most recent
    /// records are analyzed and the result is marked as truncated.
    /// `None` disables the cap.
    pub max_history_samples: Option<usize>,
    /// Maximum day gap between two screenings that still counts as a
    /// consecutive streak
    pub streak_window_days: i64,
    /// Log records skipped for missing timestamps during aggregation
    pub log_skipped_records: bool,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            max_history_samples: None,
            streak_window_days: 30,
            log_skipped_records: true,
        }
    }
}
