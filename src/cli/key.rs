//! Key command implementation

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use crate::convert::hex_to_bytes;
use crate::source::{SourceFile, SourceFileIdType};

#[derive(Args)]
pub struct KeyArgs {
    /// Raw source path as recorded in the debug info
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Name of the artificial root directory for relative paths
    #[arg(short, long, value_name = "DIR", default_value = "source")]
    pub base_dir: String,

    /// Identifier kind: none, unknown, timestamp64, md5, sha1, sha256, sha512
    #[arg(short = 't', long, value_name = "TYPE", default_value = "none")]
    pub id_type: String,

    /// Identifier as hex digits (optional 0x prefix)
    #[arg(short, long, value_name = "HEX", default_value = "")]
    pub identifier: String,

    /// Emit the key as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: KeyArgs) -> Result<()> {
    let id_type: SourceFileIdType =
        args.id_type.parse().with_context(|| format!("Invalid id type '{}'", args.id_type))?;
    let identifier = hex_to_bytes(&args.identifier)
        .with_context(|| format!("Invalid identifier '{}'", args.identifier))?;

    let source_file = SourceFile::from_raw_path(&args.path, &args.base_dir, id_type, identifier)
        .with_context(|| format!("Cannot build key for '{}'", args.path))?;

    if args.json {
        let entry = json!({
            "path": source_file.path(),
            "file_name": source_file.file_name(),
            "id_type": source_file.id_type().name(),
            "identifier": source_file.identifier_as_hex(),
        });
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!("Path: {}", source_file.path());
        println!("Id type: {}", source_file.id_type());
        if !source_file.identifier().is_empty() {
            println!("Identifier: {}", source_file.identifier_as_hex());
        }
    }

    Ok(())
}
