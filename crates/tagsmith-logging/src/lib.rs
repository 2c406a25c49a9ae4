//! tagsmith-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a global subscriber writing to stderr
//! - [`build_filter`] and [`level_filter`] to map a [`LogLevel`] onto tracing filters
//!
//! Output goes to stderr so that generated code written to stdout stays clean.

mod layer;

pub use layer::{build_filter, init_logging, level_filter};
pub use tagsmith_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, init_logging};
}
