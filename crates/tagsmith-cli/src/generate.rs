//! Generate command implementation
//!
//! Plays the host generator: loads the schema descriptor and the stub the
//! generator produced for it, runs the registered stages, and emits the
//! result.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tagsmith_core::{Generator, Host, SchemaFile, StageConfig};
use tagsmith_tag::TagStage;
use tracing::info;

/// Run the generate command
pub fn run(
    descriptor: &Path,
    stub: &Path,
    output: Option<&Path>,
    config: StageConfig,
) -> Result<()> {
    let bytes = std::fs::read(descriptor)
        .with_context(|| format!("Failed to read descriptor: {:?}", descriptor))?;
    let file = SchemaFile::from_json(&bytes)
        .with_context(|| format!("Failed to parse descriptor: {:?}", descriptor))?;

    let text = std::fs::read_to_string(stub)
        .with_context(|| format!("Failed to read stub: {:?}", stub))?;

    let rewritten = process(&file, text, config)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rewritten)
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            info!(output = ?path, bytes = rewritten.len(), "wrote tagged stub");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rewritten.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

/// Run the tag stage over one schema file and its stub
pub fn process(file: &SchemaFile, stub: String, config: StageConfig) -> Result<String> {
    let mut host = Host::new(config);
    host.register(Box::new(TagStage::new()))
        .context("Failed to register tag stage")?;
    host.init().context("Failed to initialize stages")?;

    let mut engine = Generator::from_text(stub);
    host.generate(file, &mut engine)
        .with_context(|| format!("Failed to generate {}", file.name))?;

    Ok(engine.take())
}
