//! The `tag` stage.

use crate::harvest::harvest;
use crate::rewrite::{RewriteOptions, rewrite};
use tagsmith_core::{Generator, SchemaFile, Stage, StageContext, StageError, StageResult};
use tracing::{debug, info};

/// Name the stage registers under.
pub const STAGE_NAME: &str = "tag";

/// Copies trailing field comments from the schema into the struct tags of
/// the generated stub.
#[derive(Debug, Default)]
pub struct TagStage {
    options: Option<RewriteOptions>,
}

impl TagStage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stage for TagStage {
    fn name(&self) -> &'static str {
        STAGE_NAME
    }

    fn init(&mut self, ctx: &StageContext) -> StageResult<()> {
        ctx.config
            .validate()
            .map_err(|err| StageError::InitializationFailed(format!("{STAGE_NAME}: {err}")))?;

        let options = RewriteOptions::from(&ctx.config);
        debug!(
            default_tag = %options.default_tag,
            resume_after_block_comment = options.resume_after_block_comment,
            match_go_names = options.match_go_names,
            "tag stage initialized"
        );
        self.options = Some(options);
        Ok(())
    }

    fn generate(&mut self, file: &SchemaFile, engine: &mut Generator) -> StageResult<()> {
        let options = self.options.as_ref().ok_or_else(|| StageError::InvalidState {
            expected: "Initialized".to_string(),
            actual: "Registered".to_string(),
        })?;

        let comments = harvest(file, options);
        let stub = rewrite(engine.buffer(), &comments, options);

        engine.reset();
        engine.write(&stub);

        info!(file = %file.name, types = comments.len(), "applied struct tags");
        Ok(())
    }
}

#[cfg(test)]
#[path = "stage/stage_tests.rs"]
mod stage_tests;
