#![allow(non_snake_case)]

use super::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Records every lifecycle call it receives
struct Recorder {
    name: &'static str,
    calls: Rc<RefCell<Vec<String>>>,
    fail_init: bool,
}

impl Recorder {
    fn new(name: &'static str, calls: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            name,
            calls: Rc::clone(calls),
            fail_init: false,
        }
    }
}

impl Stage for Recorder {
    fn name(&self) -> &'static str {
        self.name
    }

    fn init(&mut self, ctx: &StageContext) -> StageResult<()> {
        self.calls
            .borrow_mut()
            .push(format!("{}:init:{}", self.name, ctx.config.default_tag));
        if self.fail_init {
            return Err(StageError::InitializationFailed("boom".into()));
        }
        Ok(())
    }

    fn generate(&mut self, file: &SchemaFile, engine: &mut Generator) -> StageResult<()> {
        self.calls
            .borrow_mut()
            .push(format!("{}:generate:{}", self.name, file.name));
        engine.write(self.name);
        Ok(())
    }

    fn generate_imports(&mut self, _file: &SchemaFile, _engine: &mut Generator) -> StageResult<()> {
        self.calls.borrow_mut().push(format!("{}:imports", self.name));
        Ok(())
    }
}

fn schema(name: &str) -> SchemaFile {
    SchemaFile {
        name: name.to_string(),
        ..SchemaFile::default()
    }
}

#[test]
fn Host___register_duplicate_name___returns_error() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut host = Host::new(StageConfig::default());
    host.register(Box::new(Recorder::new("tag", &calls))).unwrap();

    let result = host.register(Box::new(Recorder::new("tag", &calls)));

    assert!(matches!(result, Err(StageError::DuplicateStage(name)) if name == "tag"));
}

#[test]
fn Host___init___passes_config_and_marks_initialized() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let config = StageConfig {
        default_tag: "v:\"x\"".into(),
        ..StageConfig::default()
    };
    let mut host = Host::new(config);
    host.register(Box::new(Recorder::new("tag", &calls))).unwrap();

    host.init().unwrap();

    assert_eq!(*calls.borrow(), vec!["tag:init:v:\"x\"".to_string()]);
    assert_eq!(host.state_of("tag"), Some(LifecycleState::Initialized));
}

#[test]
fn Host___init_twice___returns_invalid_state() {
    let mut host = Host::new(StageConfig::default());
    host.init().unwrap();

    let result = host.init();

    assert!(matches!(result, Err(StageError::InvalidState { .. })));
}

#[test]
fn Host___register_after_init___returns_invalid_state() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut host = Host::new(StageConfig::default());
    host.init().unwrap();

    let result = host.register(Box::new(Recorder::new("tag", &calls)));

    assert!(matches!(result, Err(StageError::InvalidState { .. })));
}

#[test]
fn Host___init_with_invalid_config___returns_config_error() {
    let config = StageConfig {
        default_tag: String::new(),
        ..StageConfig::default()
    };
    let mut host = Host::new(config);

    let result = host.init();

    assert!(matches!(result, Err(StageError::ConfigError(_))));
}

#[test]
fn Host___failing_init___marks_stage_failed() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut stage = Recorder::new("bad", &calls);
    stage.fail_init = true;
    let mut host = Host::new(StageConfig::default());
    host.register(Box::new(stage)).unwrap();

    let result = host.init();

    assert!(matches!(result, Err(StageError::InitializationFailed(_))));
    assert_eq!(host.state_of("bad"), Some(LifecycleState::Failed));
}

#[test]
fn Host___generate_before_init___returns_invalid_state() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut host = Host::new(StageConfig::default());
    host.register(Box::new(Recorder::new("tag", &calls))).unwrap();
    let mut engine = Generator::new();

    let result = host.generate(&schema("a.proto"), &mut engine);

    assert!(matches!(result, Err(StageError::InvalidState { .. })));
    assert!(engine.is_empty());
}

#[test]
fn Host___generate___runs_stages_in_order_then_imports() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut host = Host::new(StageConfig::default());
    host.register(Box::new(Recorder::new("first", &calls))).unwrap();
    host.register(Box::new(Recorder::new("second", &calls))).unwrap();
    host.init().unwrap();
    calls.borrow_mut().clear();
    let mut engine = Generator::new();

    host.generate(&schema("a.proto"), &mut engine).unwrap();

    assert_eq!(
        *calls.borrow(),
        vec![
            "first:generate:a.proto",
            "second:generate:a.proto",
            "first:imports",
            "second:imports",
        ]
    );
    assert_eq!(engine.buffer(), "firstsecond");
    assert_eq!(host.stage_names(), vec!["first", "second"]);
}

#[test]
fn Host___generate_per_file___returns_stage_to_initialized() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut host = Host::new(StageConfig::default());
    host.register(Box::new(Recorder::new("tag", &calls))).unwrap();
    host.init().unwrap();

    host.generate(&schema("a.proto"), &mut Generator::new()).unwrap();
    host.generate(&schema("b.proto"), &mut Generator::new()).unwrap();

    assert_eq!(host.state_of("tag"), Some(LifecycleState::Initialized));
    assert!(calls.borrow().contains(&"tag:generate:b.proto".to_string()));
}

#[test]
fn Host___state_of_unknown_stage___returns_none() {
    let host = Host::new(StageConfig::default());

    assert_eq!(host.state_of("missing"), None);
}
