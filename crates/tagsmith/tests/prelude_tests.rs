//! The facade's prelude is enough to drive the tag stage.

#![allow(non_snake_case)]

use tagsmith::descriptor::{Location, SourceCodeInfo, StructuredType};
use tagsmith::prelude::*;

#[test]
fn prelude___drives_tag_stage_through_host() {
    let file = SchemaFile {
        name: "person.proto".into(),
        message_type: vec![StructuredType::new("Person").with_field("name")],
        source_code_info: SourceCodeInfo {
            location: vec![Location::new(vec![4, 0, 2, 0].into()).with_trailing("valid:\"email\"")],
        },
        ..SchemaFile::default()
    };
    let mut host = Host::new(StageConfig::default());
    host.register(Box::new(TagStage::new())).unwrap();
    host.init().unwrap();
    let mut engine = Generator::from_text("type Person struct {\n\tName\tstring\t`json:\"name\"`\n}\n");

    host.generate(&file, &mut engine).unwrap();

    assert!(engine.buffer().contains("`json:\"name\" valid:\"email\"`"));
}

#[test]
fn DEFAULT_TAG___matches_stage_config_default() {
    assert_eq!(tagsmith::DEFAULT_TAG, StageConfig::default().default_tag);
}
