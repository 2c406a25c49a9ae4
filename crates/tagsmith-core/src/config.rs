//! Stage configuration types

use crate::{LogLevel, StageError, StageResult};
use serde::{Deserialize, Serialize};

/// Tag inserted for fields that carry no trailing comment
pub const DEFAULT_TAG: &str = "valid:\"-\"";

/// Stage configuration passed during initialization
///
/// Set once by the host before `init` and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Sentinel tag text used when a field has no trailing comment
    #[serde(default = "default_tag")]
    pub default_tag: String,

    /// Return to the enclosing struct after a block comment closes
    ///
    /// Off by default: a block comment inside a struct body ends tag
    /// insertion for the rest of that struct.
    #[serde(default)]
    pub resume_after_block_comment: bool,

    /// Key fields by their Go field name instead of the schema name
    ///
    /// Off by default: keys are the schema name with its first letter
    /// lowercased, so `user_id` never matches a generated `UserId`. When
    /// set, both sides are camel-cased the way the Go generator does it.
    #[serde(default)]
    pub match_go_names: bool,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            default_tag: default_tag(),
            resume_after_block_comment: false,
            match_go_names: false,
            log_level: default_log_level(),
        }
    }
}

impl StageConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Create configuration from the contents of a `tagsmith.toml` file
    pub fn from_toml_str(content: &str) -> StageResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Check values that serde cannot reject on its own
    pub fn validate(&self) -> StageResult<()> {
        if self.default_tag.trim().is_empty() {
            return Err(StageError::ConfigError(
                "default_tag must not be empty".to_string(),
            ));
        }
        if self.default_tag.contains('`') {
            return Err(StageError::ConfigError(
                "default_tag must not contain a backtick".to_string(),
            ));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> StageResult<LogLevel> {
        LogLevel::parse(&self.log_level).ok_or_else(|| {
            StageError::ConfigError(format!("unknown log level: {}", self.log_level))
        })
    }
}
