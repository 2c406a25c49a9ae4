//! tagsmith-core - Core traits, descriptor model, and lifecycle management
//!
//! This crate provides the foundational types for building tagsmith stages:
//! - [`Stage`] trait for implementing a post-processing stage
//! - [`Host`] for composing stages into a generation pipeline
//! - [`LifecycleState`] for managing stage lifecycle
//! - [`StageError`] for error handling
//! - [`StageConfig`] for stage configuration
//! - [`descriptor`] for the schema file model consumed by stages
//! - [`Generator`] for the generated text buffer shared with the host

mod config;
pub mod descriptor;
mod engine;
mod error;
mod host;
mod lifecycle;
mod stage;

pub use config::{DEFAULT_TAG, StageConfig};
pub use descriptor::{Field, Location, SchemaFile, SourceCodeInfo, SourcePath, StructuredType};
pub use engine::Generator;
pub use error::{StageError, StageResult};
pub use host::Host;
pub use lifecycle::LifecycleState;
pub use stage::{Stage, StageContext};

/// Log levels accepted by stage configuration
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    /// Parse a level name case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }

    /// Directive string understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Generator, Host, LifecycleState, LogLevel, SchemaFile, Stage, StageConfig, StageContext,
        StageError, StageResult,
    };
}
