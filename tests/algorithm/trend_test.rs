#[cfg(test)]
mod tests {
    use crate::utils::{datetime, record_with_highest};
    use esas_screener::{
        Screener, Symptom, TrendDirection, TrendPoint, analyze_trend, highest_score_series,
        risk_tier_series, symptom_series,
    };

    fn points(values: &[f64]) -> Vec<TrendPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| TrendPoint {
                recorded_at: datetime(2024, 1, 1 + i as u32),
                value,
            })
            .collect()
    }

    #[test]
    fn test_constant_series_is_stable() {
        let result = analyze_trend(&points(&[5.0, 5.0, 5.0, 5.0]));

        assert_eq!(result.direction, TrendDirection::Stable);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.points.len(), 4);
    }

    #[test]
    fn test_decreasing_series_is_improving() {
        let result = analyze_trend(&points(&[8.0, 6.0, 4.0, 2.0]));

        assert_eq!(result.direction, TrendDirection::Improving);
        assert!(result.confidence > 0.0);
        // Slope is exactly -2 per step, so confidence is 20
        assert!((result.confidence - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_increasing_series_is_declining() {
        let result = analyze_trend(&points(&[1.0, 3.0, 5.0, 7.0]));

        assert_eq!(result.direction, TrendDirection::Declining);
        assert!((result.confidence - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_series_is_stable_without_error() {
        let empty = analyze_trend(&[]);
        assert_eq!(empty.direction, TrendDirection::Stable);
        assert_eq!(empty.confidence, 0.0);

        let single = analyze_trend(&points(&[9.0]));
        assert_eq!(single.direction, TrendDirection::Stable);
        assert_eq!(single.confidence, 0.0);
        assert_eq!(single.points.len(), 1);
    }

    #[test]
    fn test_slight_slope_is_stable() {
        // Slope 0.08 sits inside the +/-0.1 dead band
        let result = analyze_trend(&points(&[5.0, 5.08]));
        assert_eq!(result.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_confidence_is_capped() {
        let result = analyze_trend(&points(&[0.0, 20.0]));

        assert_eq!(result.direction, TrendDirection::Declining);
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_series_extraction() {
        let screener = Screener::new();
        let records = vec![
            // Out of order on purpose; extraction sorts by timestamp
            record_with_highest(&screener, "1111111111", Some(datetime(2024, 2, 1)), 6),
            record_with_highest(&screener, "1111111111", Some(datetime(2024, 1, 1)), 8),
            record_with_highest(&screener, "1111111111", None, 10),
            record_with_highest(&screener, "1111111111", Some(datetime(2024, 3, 1)), 2),
        ];

        let series = highest_score_series(&records);
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();
        // The undated record is skipped, the rest sorted ascending
        assert_eq!(values, vec![8.0, 6.0, 2.0]);

        let pain = symptom_series(&records, Symptom::Pain);
        assert_eq!(pain.len(), 3);
        assert_eq!(pain[0].value, 8.0);

        let tiers = risk_tier_series(&records);
        let ordinals: Vec<f64> = tiers.iter().map(|p| p.value).collect();
        // 8 -> High(3), 6 -> Medium(2), 2 -> Low(1)
        assert_eq!(ordinals, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_risk_trend_from_improving_history() {
        let screener = Screener::new();
        let records: Vec<_> = [(1, 9), (2, 7), (3, 5), (4, 2)]
            .iter()
            .map(|&(month, score)| {
                record_with_highest(&screener, "1111111111", Some(datetime(2024, month, 1)), score)
            })
            .collect();

        let result = analyze_trend(&risk_tier_series(&records));
        assert_eq!(result.direction, TrendDirection::Improving);
    }
}
