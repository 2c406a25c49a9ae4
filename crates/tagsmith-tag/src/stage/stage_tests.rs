#![allow(non_snake_case)]

use super::*;
use tagsmith_core::{Location, SourceCodeInfo, StageConfig, StructuredType};

fn person_schema() -> SchemaFile {
    SchemaFile {
        name: "person.proto".into(),
        message_type: vec![StructuredType::new("Person").with_field("name").with_field("age")],
        source_code_info: SourceCodeInfo {
            location: vec![Location::new(vec![4, 0, 2, 0].into()).with_trailing(" valid:\"required\"\n")],
        },
        ..SchemaFile::default()
    }
}

const PERSON_STUB: &str =
    "type Person struct {\n\tName\tstring\t`json:\"name\"`\n\tAge\tint32\t`json:\"age\"`\n}\n";

#[test]
fn TagStage___name___is_tag() {
    assert_eq!(TagStage::new().name(), "tag");
}

#[test]
fn TagStage___init_with_backtick_default_tag___fails() {
    let config = StageConfig {
        default_tag: "valid:`x`".into(),
        ..StageConfig::default()
    };
    let mut stage = TagStage::new();

    let err = stage.init(&StageContext::new(config)).unwrap_err();

    assert!(matches!(err, StageError::InitializationFailed(_)));
    assert_eq!(
        err.to_string(),
        "initialization failed: tag: configuration error: default_tag must not contain a backtick"
    );
}

#[test]
fn TagStage___generate_after_failed_init___returns_invalid_state() {
    let config = StageConfig {
        default_tag: String::new(),
        ..StageConfig::default()
    };
    let mut stage = TagStage::new();
    let _ = stage.init(&StageContext::new(config));
    let mut engine = Generator::from_text(PERSON_STUB);

    let result = stage.generate(&person_schema(), &mut engine);

    assert!(matches!(result, Err(StageError::InvalidState { .. })));
}

#[test]
fn TagStage___generate_before_init___returns_invalid_state() {
    let mut stage = TagStage::new();
    let mut engine = Generator::from_text(PERSON_STUB);

    let result = stage.generate(&person_schema(), &mut engine);

    assert!(matches!(result, Err(StageError::InvalidState { .. })));
    assert_eq!(engine.buffer(), PERSON_STUB);
}

#[test]
fn TagStage___generate___replaces_engine_buffer() {
    let mut stage = TagStage::new();
    stage
        .init(&StageContext::new(StageConfig::default()))
        .unwrap();
    let mut engine = Generator::from_text(PERSON_STUB);

    stage.generate(&person_schema(), &mut engine).unwrap();

    assert_eq!(
        engine.buffer(),
        "type Person struct {\n\
         \tName\tstring\t`json:\"name\" valid:\"required\"`\n\
         \tAge\tint32\t`json:\"age\" valid:\"-\"`\n\
         }\n\n"
    );
}

#[test]
fn TagStage___configured_default_tag___used_for_uncommented_fields() {
    let config = StageConfig {
        default_tag: "validate:\"-\"".into(),
        ..StageConfig::default()
    };
    let mut stage = TagStage::new();
    stage.init(&StageContext::new(config)).unwrap();
    let mut engine = Generator::from_text(PERSON_STUB);

    stage.generate(&person_schema(), &mut engine).unwrap();

    assert!(engine.buffer().contains("`json:\"age\" validate:\"-\"`"));
}

#[test]
fn TagStage___each_file_uses_its_own_comments() {
    let mut stage = TagStage::new();
    stage
        .init(&StageContext::new(StageConfig::default()))
        .unwrap();
    let mut first = Generator::from_text(PERSON_STUB);
    stage.generate(&person_schema(), &mut first).unwrap();

    let mut second = Generator::from_text(PERSON_STUB);
    stage.generate(&SchemaFile::default(), &mut second).unwrap();

    assert_eq!(second.buffer(), format!("{PERSON_STUB}\n"));
}
