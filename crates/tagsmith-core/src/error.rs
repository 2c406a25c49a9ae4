//! Error types for tagsmith stages

use thiserror::Error;

/// Result type alias for stage operations
pub type StageResult<T> = Result<T, StageError>;

/// Error type for stage lifecycle and configuration
///
/// The tag rewrite itself never fails; these errors cover misuse of the
/// lifecycle and unreadable configuration.
#[derive(Error, Debug)]
pub enum StageError {
    /// Stage is not in a valid state for the requested operation
    #[error("invalid lifecycle state: expected {expected}, got {actual}")]
    InvalidState { expected: String, actual: String },

    /// Failed to initialize the stage
    #[error("initialization failed: {0}")]
    InitializationFailed(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// A stage with the same name is already registered
    #[error("duplicate stage: {0}")]
    DuplicateStage(String),
}

impl StageError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            StageError::InvalidState { .. } => 1,
            StageError::InitializationFailed(_) => 2,
            StageError::ConfigError(_) => 3,
            StageError::SerializationError(_) => 4,
            StageError::DuplicateStage(_) => 5,
        }
    }
}

impl From<serde_json::Error> for StageError {
    fn from(err: serde_json::Error) -> Self {
        StageError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for StageError {
    fn from(err: toml::de::Error) -> Self {
        StageError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
