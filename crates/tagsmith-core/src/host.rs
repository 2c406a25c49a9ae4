//! Explicit stage composition for the generation pipeline

use crate::{
    Generator, LifecycleState, SchemaFile, Stage, StageConfig, StageContext, StageError,
    StageResult,
};
use tracing::{debug, info_span, warn};

/// Holds the registered stages and drives their lifecycle
///
/// Stages are registered by name, initialized once, then run in
/// registration order for every schema file.
pub struct Host {
    config: StageConfig,
    stages: Vec<(Box<dyn Stage>, StageContext)>,
    initialized: bool,
}

impl Host {
    /// Create a host whose stages will all receive `config`
    pub fn new(config: StageConfig) -> Self {
        Self {
            config,
            stages: Vec::new(),
            initialized: false,
        }
    }

    /// Register a stage; names must be unique and registration closes at init
    pub fn register(&mut self, stage: Box<dyn Stage>) -> StageResult<()> {
        if self.initialized {
            return Err(StageError::InvalidState {
                expected: "host before init".to_string(),
                actual: "initialized host".to_string(),
            });
        }
        let name = stage.name();
        if self.stages.iter().any(|(s, _)| s.name() == name) {
            return Err(StageError::DuplicateStage(name.to_string()));
        }
        debug!(stage = name, "registered stage");
        let ctx = StageContext::new(self.config.clone());
        self.stages.push((stage, ctx));
        Ok(())
    }

    /// Names of the registered stages in run order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|(s, _)| s.name()).collect()
    }

    /// Lifecycle state of a registered stage
    pub fn state_of(&self, name: &str) -> Option<LifecycleState> {
        self.stages
            .iter()
            .find(|(s, _)| s.name() == name)
            .map(|(_, ctx)| ctx.state())
    }

    /// Initialize every registered stage; may only be called once
    pub fn init(&mut self) -> StageResult<()> {
        if self.initialized {
            return Err(StageError::InvalidState {
                expected: "host before init".to_string(),
                actual: "initialized host".to_string(),
            });
        }
        self.config.validate()?;
        self.initialized = true;

        for (stage, ctx) in &mut self.stages {
            if let Err(err) = stage.init(ctx) {
                warn!(stage = stage.name(), error = %err, "stage init failed");
                ctx.set_state(LifecycleState::Failed);
                return Err(err);
            }
            ctx.transition_to(LifecycleState::Initialized)?;
        }
        Ok(())
    }

    /// Run every stage over one schema file whose stub is in `engine`
    pub fn generate(&mut self, file: &SchemaFile, engine: &mut Generator) -> StageResult<()> {
        let span = info_span!("generate", file = %file.name);
        let _enter = span.enter();

        for (stage, ctx) in &mut self.stages {
            ctx.transition_to(LifecycleState::Generating)?;
            if let Err(err) = stage.generate(file, engine) {
                warn!(stage = stage.name(), error = %err, "stage generate failed");
                ctx.set_state(LifecycleState::Failed);
                return Err(err);
            }
        }

        for (stage, ctx) in &mut self.stages {
            if let Err(err) = stage.generate_imports(file, engine) {
                ctx.set_state(LifecycleState::Failed);
                return Err(err);
            }
            ctx.transition_to(LifecycleState::Initialized)?;
        }

        debug!(bytes = engine.len(), "file generated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "host/host_tests.rs"]
mod host_tests;
