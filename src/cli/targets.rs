//! Targets command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use crate::registry::{builtin_targets, load_targets, Endian, ProcessorTarget};

#[derive(Args)]
pub struct TargetsArgs {
    /// Show only the target with this name (case-insensitive)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Load the target table from a TOML file instead of the built-in one
    #[arg(short, long, value_name = "TOML")]
    pub file: Option<PathBuf>,

    /// Emit targets as JSON instead of a plain listing
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TargetsArgs) -> Result<()> {
    let loaded;
    let targets: &[ProcessorTarget] = match &args.file {
        Some(path) => {
            loaded = load_targets(path)?;
            &loaded
        }
        None => builtin_targets(),
    };

    let selected: Vec<&ProcessorTarget> = match &args.name {
        Some(name) => {
            let found: Vec<_> =
                targets.iter().filter(|t| t.name.eq_ignore_ascii_case(name)).collect();
            if found.is_empty() {
                bail!("No such target: {name}");
            }
            found
        }
        None => targets.iter().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    println!("Processor targets: {}", selected.len());
    for target in &selected {
        let endian = match target.endian {
            Endian::Big => "big",
            Endian::Little => "little",
        };
        println!(
            "  {:<16} {:<7} {:>2}-bit  {} (v{})",
            target.name, endian, target.bits, target.spec_file, target.spec_version
        );
    }

    Ok(())
}
