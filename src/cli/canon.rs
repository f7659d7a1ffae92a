//! Canon command implementation

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use crate::canon::normalize;

#[derive(Args)]
pub struct CanonArgs {
    /// Raw source paths as recorded in the debug info
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Name of the artificial root directory for relative paths
    #[arg(short, long, value_name = "DIR", default_value = "source")]
    pub base_dir: String,

    /// Emit results as a JSON array instead of plain lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CanonArgs) -> Result<()> {
    let mut results = Vec::with_capacity(args.paths.len());
    for raw in &args.paths {
        let canonical = normalize(raw, &args.base_dir)
            .with_context(|| format!("Cannot canonicalize '{raw}'"))?;
        tracing::debug!(%raw, %canonical, "canonicalized path");
        results.push((raw, canonical));
    }

    if args.json {
        let entries: Vec<_> = results
            .iter()
            .map(|(raw, canonical)| json!({ "input": raw, "canonical": canonical }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (_, canonical) in &results {
            println!("{canonical}");
        }
    }

    Ok(())
}
