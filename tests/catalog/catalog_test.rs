#[cfg(test)]
mod tests {
    use esas_screener::{ProtocolCatalog, ScreeningError, Symptom};

    #[test]
    fn test_builtin_catalog_is_total() {
        let catalog = ProtocolCatalog::builtin();

        assert!(!catalog.version().is_empty());
        assert_eq!(catalog.entries().count(), Symptom::COUNT);

        // Every symptom resolves to a usable protocol
        for symptom in Symptom::ALL {
            let protocol = catalog.get(symptom).unwrap();
            assert_eq!(protocol.symptom, symptom);
            assert!(!protocol.diagnosis_label.is_empty());
            assert!(!protocol.steps.is_empty());
            assert!(!protocol.evaluation_criteria.is_empty());
        }
    }

    #[test]
    fn test_from_entries_rejects_missing_symptom() {
        let mut entries: Vec<_> = ProtocolCatalog::builtin().entries().cloned().collect();
        entries.pop();

        let result = ProtocolCatalog::from_entries("test".to_string(), entries);
        assert!(matches!(result, Err(ScreeningError::InvalidCatalog(_))));
    }

    #[test]
    fn test_from_entries_rejects_duplicate_symptom() {
        let mut entries: Vec<_> = ProtocolCatalog::builtin().entries().cloned().collect();
        entries[1] = entries[0].clone();

        let result = ProtocolCatalog::from_entries("test".to_string(), entries);
        assert!(matches!(result, Err(ScreeningError::InvalidCatalog(_))));
    }

    #[test]
    fn test_json_load() {
        let json = serde_json::to_string(&ProtocolCatalog::builtin()).unwrap();
        let loaded = ProtocolCatalog::from_json(&json).unwrap();

        assert_eq!(loaded, ProtocolCatalog::builtin());
    }

    #[test]
    fn test_json_load_rejects_garbage() {
        let result = ProtocolCatalog::from_json("{not json");
        assert!(matches!(result, Err(ScreeningError::CatalogParse(_))));
    }
}
