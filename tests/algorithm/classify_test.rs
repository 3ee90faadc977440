#[cfg(test)]
mod tests {
    use crate::utils::submission;
    use esas_screener::{RiskTier, ScreeningError, Symptom, classify_scores, normalize_scores};
    use std::collections::HashMap;

    #[test]
    fn test_missing_indices_default_to_zero() {
        let scores = normalize_scores(&submission(&[(1, 5)])).unwrap();

        assert_eq!(scores.get(Symptom::Pain), 5);
        for symptom in &Symptom::ALL[1..] {
            assert_eq!(scores.get(*symptom), 0);
        }
    }

    #[test]
    fn test_empty_submission_is_all_zero() {
        let scores = normalize_scores(&HashMap::new()).unwrap();
        assert_eq!(scores.highest(), 0);

        let classification = classify_scores(&scores);
        assert_eq!(classification.risk_tier, RiskTier::None);
    }

    #[test]
    fn test_out_of_range_rejected_with_index() {
        let result = normalize_scores(&submission(&[(1, 2), (4, 11)]));
        match result {
            Err(ScreeningError::ScoreOutOfRange { symptom, value }) => {
                assert_eq!(symptom, 4);
                assert_eq!(value, 11);
            }
            other => panic!("expected ScoreOutOfRange, got {other:?}"),
        }

        let result = normalize_scores(&submission(&[(2, -1)]));
        assert!(matches!(
            result,
            Err(ScreeningError::ScoreOutOfRange {
                symptom: 2,
                value: -1
            })
        ));
    }

    #[test]
    fn test_unknown_symptom_rejected() {
        let result = normalize_scores(&submission(&[(10, 5)]));
        assert!(matches!(result, Err(ScreeningError::UnknownSymptom(10))));

        let result = normalize_scores(&submission(&[(0, 5)]));
        assert!(matches!(result, Err(ScreeningError::UnknownSymptom(0))));
    }

    #[test]
    fn test_tie_breaks_toward_lowest_index() {
        let scores = normalize_scores(&submission(&[(1, 7), (4, 7)])).unwrap();
        let classification = classify_scores(&scores);

        assert_eq!(classification.primary_symptom, Symptom::Pain);
        assert_eq!(classification.highest_score, 7);
    }

    #[test]
    fn test_classification_scenario() {
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
        let scores = normalize_scores(&raw).unwrap();
        let classification = classify_scores(&scores);

        assert_eq!(classification.highest_score, 9);
        assert_eq!(classification.primary_symptom, Symptom::Pain);
        assert_eq!(classification.risk_tier, RiskTier::Critical);
    }
}
