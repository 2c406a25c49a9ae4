//! tagsmith CLI - Struct tags from trailing schema comments
//!
//! Commands:
//! - `tagsmith generate` - Tag the structs of a generated Go stub
//! - `tagsmith check` - Validate a tagsmith.toml config

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tagsmith_core::LogLevel;

mod generate;
mod settings;

#[derive(Parser)]
#[command(name = "tagsmith")]
#[command(author, version, about = "Copy trailing .proto field comments into Go struct tags", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tag the structs of a generated stub using its schema descriptor
    Generate {
        /// Schema descriptor (FileDescriptorProto as JSON)
        #[arg(short, long)]
        descriptor: PathBuf,

        /// Generated Go stub to rewrite
        #[arg(short, long)]
        stub: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to tagsmith.toml (default: ./tagsmith.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured log level
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Validate a tagsmith.toml config
    Check {
        /// Path to tagsmith.toml (default: ./tagsmith.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            descriptor,
            stub,
            output,
            config,
            log_level,
        } => {
            let mut stage_config = settings::resolve(config.as_deref())?;
            if let Some(level) = log_level {
                stage_config.log_level = level;
            }
            let level = stage_config.level()?;
            tagsmith_logging::init_logging(level);

            generate::run(&descriptor, &stub, output.as_deref(), stage_config)?;
        }
        Commands::Check { config } => {
            tagsmith_logging::init_logging(LogLevel::Warn);
            settings::check(config.as_deref())?;
        }
    }

    Ok(())
}
