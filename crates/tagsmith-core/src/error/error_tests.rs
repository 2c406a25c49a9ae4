#![allow(non_snake_case)]

use super::*;

#[test]
fn StageError___config_error___returns_code_3() {
    let err = StageError::ConfigError("test".into());

    let code = err.error_code();

    assert_eq!(code, 3);
}

#[test]
fn StageError___invalid_state___displays_correctly() {
    let err = StageError::InvalidState {
        expected: "Initialized".into(),
        actual: "Registered".into(),
    };

    let display = err.to_string();

    assert_eq!(
        display,
        "invalid lifecycle state: expected Initialized, got Registered"
    );
}

#[test]
fn StageError___duplicate_stage___displays_name() {
    let err = StageError::DuplicateStage("tag".into());

    assert_eq!(err.to_string(), "duplicate stage: tag");
}

#[test]
fn StageError___all_variants___have_unique_codes() {
    let errors = vec![
        StageError::InvalidState {
            expected: "a".into(),
            actual: "b".into(),
        },
        StageError::InitializationFailed("".into()),
        StageError::ConfigError("".into()),
        StageError::SerializationError("".into()),
        StageError::DuplicateStage("".into()),
    ];

    let codes: Vec<u32> = errors.iter().map(|e| e.error_code()).collect();
    let unique: std::collections::HashSet<u32> = codes.iter().copied().collect();

    assert_eq!(codes.len(), unique.len(), "error codes must be unique");
}

#[test]
fn StageError___from_serde_json___maps_to_serialization_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();

    let err: StageError = json_err.into();

    assert!(matches!(err, StageError::SerializationError(_)));
}

#[test]
fn StageError___from_toml___maps_to_config_error() {
    let toml_err = toml::from_str::<toml::Table>("default_tag = ").unwrap_err();

    let err: StageError = toml_err.into();

    assert!(matches!(err, StageError::ConfigError(_)));
}
