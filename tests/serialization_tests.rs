//! Integration tests for definition files

#[cfg(feature = "serialization")]
mod serialization_integration_tests {
    use libautomata::catalog;
    use libautomata::prelude::*;
    use libautomata::serialization::SerializationError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_catalog_survives_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        for exercise in catalog::catalog() {
            let path = temp_dir.path().join(format!("{}.json", exercise.id));
            let def = exercise.definition().unwrap();
            save_definition(&def, &path).unwrap();

            let loaded = load_definition(&path).unwrap();
            assert_eq!(loaded.mode(), def.mode());
            for &(input, expected) in exercise.cases {
                assert_eq!(
                    run(&loaded, input).accepted(),
                    expected,
                    "{} on {input:?} after reload",
                    exercise.id
                );
            }
        }
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_definition(temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(SerializationError::Io(_))));
    }

    #[test]
    fn test_load_rejects_invalid_definition() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{
                "states": ["q0"],
                "alphabet": ["0"],
                "initial_state": "q9",
                "accepting": [],
                "transitions": []
            }"#,
        )
        .unwrap();

        let result = load_definition(&path);
        assert!(matches!(
            result,
            Err(SerializationError::Definition(DefinitionError::UnknownInitialState(_)))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let result = from_json_str("{ not json");
        assert!(matches!(result, Err(SerializationError::Json(_))));
    }

    #[test]
    fn test_run_result_serializes() {
        let def = catalog::find("abc").unwrap().definition().unwrap();
        let result = run(&def, "abc");

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("verdict").is_some());
        assert_eq!(json["final_state"], "qf");

        let back: RunResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
