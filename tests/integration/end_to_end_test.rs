#[cfg(test)]
mod tests {
    use crate::utils::{datetime, submission};
    use esas_screener::{
        ProtocolCatalog, RiskTier, Screener, ScreeningCollection, Symptom, TrendDirection,
        UrgencyLevel, aggregate_all, classify_batch, generate_summary, trend_overview,
    };

    #[test]
    fn test_single_screening_pipeline() {
        let screener = Screener::new();
        let raw = submission(&[
            (1, 9),
            (2, 3),
            (3, 2),
            (4, 1),
            (5, 0),
            (6, 0),
            (7, 2),
            (8, 1),
            (9, 3),
        ]);

        let record = screener
            .screen("1111111111", &raw, Some(datetime(2024, 3, 1)))
            .unwrap();

        assert_eq!(record.classification.highest_score, 9);
        assert_eq!(record.classification.primary_symptom, Symptom::Pain);
        assert_eq!(record.classification.risk_tier, RiskTier::Critical);
        assert_eq!(record.recommendation.urgency, UrgencyLevel::High);

        // The protocol is the catalog entry for the primary symptom
        let expected = ProtocolCatalog::builtin();
        assert_eq!(
            record.recommendation.protocol.diagnosis_label,
            expected.get(Symptom::Pain).unwrap().diagnosis_label
        );
    }

    #[test]
    fn test_batch_classification_matches_sequential() {
        let screener = Screener::new();
        let submissions: Vec<_> = (0..=10)
            .map(|score| submission(&[(1, score), (5, 3)]))
            .collect();

        let batch = classify_batch(&submissions, screener.catalog());
        assert_eq!(batch.len(), submissions.len());

        for (raw, result) in submissions.iter().zip(&batch) {
            let (_, classification, recommendation) = result.as_ref().unwrap();
            let (expected_classification, expected_recommendation) =
                screener.classify(raw).unwrap();
            assert_eq!(*classification, expected_classification);
            assert_eq!(*recommendation, expected_recommendation);
        }
    }

    #[test]
    fn test_batch_reports_errors_per_submission() {
        let screener = Screener::new();
        let submissions = vec![submission(&[(1, 5)]), submission(&[(1, 11)])];

        let batch = classify_batch(&submissions, screener.catalog());

        assert!(batch[0].is_ok());
        assert!(batch[1].is_err());
    }

    #[test]
    fn test_history_analytics_pipeline() {
        let screener = Screener::new();
        let mut collection = ScreeningCollection::new();

        // An improving patient screened monthly
        for (month, score) in [(1, 9), (2, 7), (3, 4), (4, 2)] {
            let record = screener
                .screen(
                    "1111111111",
                    &submission(&[(1, score), (2, 1)]),
                    Some(datetime(2024, month, 10)),
                )
                .unwrap();
            collection.add(record);
        }

        let now = datetime(2024, 4, 20);

        let trends = trend_overview(&collection);
        assert_eq!(
            trends["1111111111"].direction,
            TrendDirection::Improving
        );

        let statistics = aggregate_all(&collection, now, screener.config());
        let stats = &statistics["1111111111"];
        assert_eq!(stats.samples_used, 4);
        assert_eq!(stats.risk_distribution.count(RiskTier::Critical), 1);
        assert_eq!(stats.frequency.this_month, 1);
        assert_eq!(stats.frequency.last_month, 1);

        let summary = generate_summary("1111111111", stats);
        assert!(summary.contains("Patient: 1111111111"));

        // Latest screening is low tier and recent, so no follow-up yet
        let plan = screener
            .follow_up(collection.records("1111111111"), now)
            .unwrap();
        assert!(!plan.follow_up_needed);
        assert_eq!(plan.priority, UrgencyLevel::Low);
        assert_eq!(
            plan.next_recommended_date,
            datetime(2024, 5, 10).date()
        );
    }

    #[test]
    fn test_declining_history_escalates_follow_up() {
        let screener = Screener::new();
        let mut collection = ScreeningCollection::new();

        for (month, score) in [(1, 2), (2, 4), (3, 6), (4, 8)] {
            let record = screener
                .screen(
                    "2222222222",
                    &submission(&[(6, score)]),
                    Some(datetime(2024, month, 10)),
                )
                .unwrap();
            collection.add(record);
        }

        let now = datetime(2024, 4, 11);
        let plan = screener
            .follow_up(collection.records("2222222222"), now)
            .unwrap();

        // High tier needs follow-up regardless of elapsed time, and the
        // declining trend keeps priority at high
        assert!(plan.follow_up_needed);
        assert_eq!(plan.priority, UrgencyLevel::High);
    }
}
