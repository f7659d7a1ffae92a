//! Processor-target table.
//!
//! A target record names an endianness, an address width, and the versioned
//! processor specification file it references. The table is declarative
//! data consumed by loaders elsewhere; nothing here dispatches on it. The
//! built-in table ships embedded in the binary, and an alternate table can
//! be loaded from a TOML file with the same shape.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    Big,
    Little,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorTarget {
    /// Conventional processor:endian:bits spelling, e.g. "x86:LE:64".
    pub name: String,
    pub endian: Endian,
    /// Address width in bits.
    pub bits: u8,
    /// Processor specification file this record was taken from.
    pub spec_file: String,
    /// Version of the specification file, tracked externally.
    pub spec_version: String,
}

#[derive(Deserialize)]
struct TargetTable {
    #[serde(default)]
    target: Vec<ProcessorTarget>,
}

static BUILTIN: Lazy<Vec<ProcessorTarget>> = Lazy::new(|| {
    parse_targets(include_str!("targets.toml")).expect("embedded target table is valid")
});

/// The built-in target table, parsed once on first use.
pub fn builtin_targets() -> &'static [ProcessorTarget] {
    &BUILTIN
}

/// Case-insensitive lookup in the built-in table.
pub fn find_target(name: &str) -> Option<&'static ProcessorTarget> {
    BUILTIN.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Load a target table from an external TOML file.
pub fn load_targets(path: &Path) -> Result<Vec<ProcessorTarget>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading target table: {}", path.display()))?;
    let targets = parse_targets(&content)
        .with_context(|| format!("Invalid target table: {}", path.display()))?;
    tracing::debug!(count = targets.len(), table = %path.display(), "loaded target table");
    Ok(targets)
}

fn parse_targets(content: &str) -> Result<Vec<ProcessorTarget>> {
    let table: TargetTable = toml::from_str(content).context("Invalid TOML syntax")?;
    Ok(table.target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_table_parses_and_is_nonempty() {
        assert!(!builtin_targets().is_empty());
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let mut names: Vec<&str> = builtin_targets().iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before, "duplicate target name in built-in table");
    }

    #[test]
    fn test_find_target_is_case_insensitive() {
        let target = find_target("x86:le:64").expect("x86:LE:64 present");
        assert_eq!(target.endian, Endian::Little);
        assert_eq!(target.bits, 64);
        assert!(find_target("no-such-target").is_none());
    }

    #[test]
    fn test_name_encodes_endianness_and_width() {
        for target in builtin_targets() {
            let parts: Vec<&str> = target.name.split(':').collect();
            assert_eq!(parts.len(), 3, "bad name shape: {}", target.name);
            let expected = match target.endian {
                Endian::Big => "BE",
                Endian::Little => "LE",
            };
            assert_eq!(parts[1], expected, "endian tag mismatch in {}", target.name);
            assert_eq!(parts[2], target.bits.to_string(), "width mismatch in {}", target.name);
        }
    }

    #[test]
    fn test_load_targets_from_external_file() {
        let mut file = NamedTempFile::new().expect("tmp");
        file.write_all(
            br#"
[[target]]
name = "Z80:LE:16"
endian = "little"
bits = 16
spec_file = "z80.sla"
spec_version = "1.0"
"#,
        )
        .expect("write");
        file.flush().expect("flush");

        let targets = load_targets(file.path()).expect("load");
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].name, "Z80:LE:16");
        assert_eq!(targets[0].endian, Endian::Little);
    }

    #[test]
    fn test_load_targets_rejects_bad_toml() {
        let mut file = NamedTempFile::new().expect("tmp");
        file.write_all(b"[[target]]\nname = 42\n").expect("write");
        file.flush().expect("flush");
        assert!(load_targets(file.path()).is_err());
    }

    #[test]
    fn test_load_targets_missing_file_errors() {
        assert!(load_targets(Path::new("/nonexistent/targets.toml")).is_err());
    }
}
