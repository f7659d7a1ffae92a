//! Command-line interface for dwarf-canon
//!
//! Provides `canon`, `key`, and `targets` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod canon;
mod key;
mod targets;

/// Canonicalize debug-info source paths into stable registry keys
#[derive(Parser)]
#[command(name = "dwarf-canon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonicalize raw source paths
    Canon(canon::CanonArgs),

    /// Build a source-file registry key from a path and identifier
    Key(key::KeyArgs),

    /// List or look up processor targets
    Targets(targets::TargetsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Canon(args) => canon::run(args),
        Commands::Key(args) => key::run(args),
        Commands::Targets(args) => targets::run(args),
    }
}
