#[cfg(test)]
mod tests {
    use crate::utils::{datetime, record_with_highest};
    use esas_screener::{Screener, ScreeningCollection};

    #[test]
    fn test_add_keeps_time_order() {
        let screener = Screener::new();
        let mut collection = ScreeningCollection::new();

        // Insert out of chronological order
        collection.add(record_with_highest(
            &screener,
            "1111111111",
            Some(datetime(2024, 3, 1)),
            5,
        ));
        collection.add(record_with_highest(
            &screener,
            "1111111111",
            Some(datetime(2024, 1, 1)),
            8,
        ));
        collection.add(record_with_highest(
            &screener,
            "1111111111",
            Some(datetime(2024, 2, 1)),
            6,
        ));

        let records = collection.records("1111111111");
        let timestamps: Vec<_> = records.iter().map(|r| r.recorded_at.unwrap()).collect();
        assert_eq!(
            timestamps,
            vec![
                datetime(2024, 1, 1),
                datetime(2024, 2, 1),
                datetime(2024, 3, 1)
            ]
        );
    }

    #[test]
    fn test_undated_records_sort_last() {
        let screener = Screener::new();
        let mut collection = ScreeningCollection::new();

        collection.add(record_with_highest(&screener, "1111111111", None, 4));
        collection.add(record_with_highest(
            &screener,
            "1111111111",
            Some(datetime(2024, 5, 1)),
            6,
        ));

        let records = collection.records("1111111111");
        assert!(records[0].is_dated());
        assert!(!records[1].is_dated());

        // latest() prefers the most recent dated record
        let latest = collection.latest("1111111111").unwrap();
        assert_eq!(latest.recorded_at, Some(datetime(2024, 5, 1)));
    }

    #[test]
    fn test_unknown_patient_is_empty() {
        let collection = ScreeningCollection::new();

        assert!(collection.records("2222222222").is_empty());
        assert!(collection.latest("2222222222").is_none());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_counts() {
        let screener = Screener::new();
        let mut collection = ScreeningCollection::new();

        collection.add(record_with_highest(
            &screener,
            "1111111111",
            Some(datetime(2024, 1, 1)),
            3,
        ));
        collection.add(record_with_highest(
            &screener,
            "1111111111",
            Some(datetime(2024, 2, 1)),
            3,
        ));
        collection.add(record_with_highest(
            &screener,
            "2222222222",
            Some(datetime(2024, 1, 15)),
            7,
        ));

        assert_eq!(collection.patient_count(), 2);
        assert_eq!(collection.record_count(), 3);

        let mut patients = collection.patients();
        patients.sort_unstable();
        assert_eq!(patients, vec!["1111111111", "2222222222"]);

        let total_via_iter: usize = collection.iter().map(|(_, records)| records.len()).sum();
        assert_eq!(total_via_iter, 3);
    }
}
