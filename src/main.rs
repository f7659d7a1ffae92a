//! dwarf-canon: canonicalize debug-info source paths into registry keys

use anyhow::Result;

fn main() -> Result<()> {
    dwarf_canon::cli::run()
}
