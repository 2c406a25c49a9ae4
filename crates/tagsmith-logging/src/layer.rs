//! Subscriber construction

use tagsmith_core::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable that overrides the configured level
pub const LOG_ENV: &str = "RUST_LOG";

/// Convert our LogLevel to a tracing LevelFilter
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Filter from `RUST_LOG` if set and valid, otherwise from `level`
pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_filter(level).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// Initialize the logging system
///
/// Installs a `fmt` subscriber on stderr. Call this once at startup; later
/// calls are ignored.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let subscriber = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt_layer);

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
