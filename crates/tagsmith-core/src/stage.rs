//! Stage trait and context types

use crate::{Generator, LifecycleState, SchemaFile, StageConfig, StageError, StageResult};
use std::sync::atomic::{AtomicU8, Ordering};

/// Context provided to stage operations
pub struct StageContext {
    /// Stage configuration
    pub config: StageConfig,
    /// Current lifecycle state
    state: AtomicU8,
}

impl StageContext {
    /// Create a new stage context
    pub fn new(config: StageConfig) -> Self {
        Self {
            config,
            state: AtomicU8::new(LifecycleState::Registered.as_u8()),
        }
    }

    /// Get current lifecycle state
    pub fn state(&self) -> LifecycleState {
        LifecycleState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Set lifecycle state directly (bypassing transition validation)
    pub fn set_state(&self, state: LifecycleState) {
        self.state.store(state.as_u8(), Ordering::SeqCst);
    }

    /// Attempt to transition to a new state
    pub fn transition_to(&self, target: LifecycleState) -> StageResult<()> {
        let current = self.state();
        if current.can_transition_to(target) {
            self.set_state(target);
            Ok(())
        } else {
            Err(StageError::InvalidState {
                expected: format!("state that can transition to {}", target),
                actual: current.to_string(),
            })
        }
    }
}

/// A post-processing stage run by the host after it has generated a file
///
/// The host calls [`Stage::init`] exactly once, then [`Stage::generate`]
/// once per schema file. A stage rewrites the generator's buffer in place.
///
/// # Example
///
/// ```ignore
/// use tagsmith_core::prelude::*;
///
/// struct Upper;
///
/// impl Stage for Upper {
///     fn name(&self) -> &'static str {
///         "upper"
///     }
///
///     fn init(&mut self, _ctx: &StageContext) -> StageResult<()> {
///         Ok(())
///     }
///
///     fn generate(&mut self, _file: &SchemaFile, engine: &mut Generator) -> StageResult<()> {
///         let upper = engine.buffer().to_uppercase();
///         engine.reset();
///         engine.write(&upper);
///         Ok(())
///     }
/// }
/// ```
pub trait Stage {
    /// Unique name the stage is registered under
    fn name(&self) -> &'static str;

    /// Called once before any file is processed
    fn init(&mut self, ctx: &StageContext) -> StageResult<()>;

    /// Called once per schema file, after the host has filled the buffer
    fn generate(&mut self, file: &SchemaFile, engine: &mut Generator) -> StageResult<()>;

    /// Called after every stage has run [`Stage::generate`] for a file
    ///
    /// Override this to add imports to the generated file.
    fn generate_imports(&mut self, _file: &SchemaFile, _engine: &mut Generator) -> StageResult<()> {
        Ok(())
    }
}
