//! tagsmith.toml loading and the `check` command

use anyhow::{Context, Result};
use std::path::Path;
use tagsmith_core::StageConfig;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "tagsmith.toml";

/// Load and validate a config file
pub fn load(path: &Path) -> Result<StageConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {:?}", path))?;

    let config = StageConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config: {:?}", path))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {:?}", path))?;

    Ok(config)
}

/// Load the given config, or `tagsmith.toml` if present, or the defaults
pub fn resolve(path: Option<&Path>) -> Result<StageConfig> {
    match path {
        Some(path) => load(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => load(Path::new(DEFAULT_CONFIG_FILE)),
        None => Ok(StageConfig::default()),
    }
}

/// Check command implementation
pub fn check(config_path: Option<&Path>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    println!("Checking config: {}", path.display());

    let config = load(path)?;

    println!("✓ Default tag: {}", config.default_tag);
    println!(
        "✓ Resume after block comment: {}",
        config.resume_after_block_comment
    );
    println!("✓ Match Go names: {}", config.match_go_names);
    println!("✓ Log level: {}", config.log_level);
    println!("\nConfig is valid!");

    Ok(())
}
