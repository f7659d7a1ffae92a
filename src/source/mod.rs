//! Source-file registry key types.
//!
//! A source file is keyed by the triple (canonical path, identifier kind,
//! identifier bytes). The identifier lets two files that share a path but
//! differ in content (different builds, different checksums) stay distinct
//! in the registry.

use std::fmt;
use std::str::FromStr;

use crate::canon;
use crate::convert::bytes_to_hex;
use crate::error::{CanonError, Result};

/// Kind of identifier attached to a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceFileIdType {
    /// No identifier; the path alone is the key.
    #[default]
    None,
    /// Identifier of unconstrained length and unknown provenance.
    Unknown,
    /// 8-byte big-endian timestamp.
    Timestamp64,
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl SourceFileIdType {
    /// Required identifier length in bytes, or `None` when unconstrained.
    pub fn byte_length(&self) -> Option<usize> {
        match self {
            SourceFileIdType::None => Some(0),
            SourceFileIdType::Unknown => None,
            SourceFileIdType::Timestamp64 => Some(8),
            SourceFileIdType::Md5 => Some(16),
            SourceFileIdType::Sha1 => Some(20),
            SourceFileIdType::Sha256 => Some(32),
            SourceFileIdType::Sha512 => Some(64),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceFileIdType::None => "none",
            SourceFileIdType::Unknown => "unknown",
            SourceFileIdType::Timestamp64 => "timestamp64",
            SourceFileIdType::Md5 => "md5",
            SourceFileIdType::Sha1 => "sha1",
            SourceFileIdType::Sha256 => "sha256",
            SourceFileIdType::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for SourceFileIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceFileIdType {
    type Err = CanonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(SourceFileIdType::None),
            "unknown" => Ok(SourceFileIdType::Unknown),
            "timestamp64" => Ok(SourceFileIdType::Timestamp64),
            "md5" => Ok(SourceFileIdType::Md5),
            "sha1" => Ok(SourceFileIdType::Sha1),
            "sha256" => Ok(SourceFileIdType::Sha256),
            "sha512" => Ok(SourceFileIdType::Sha512),
            other => Err(CanonError::UnknownIdType(other.to_string())),
        }
    }
}

/// A validated source-file registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFile {
    path: String,
    id_type: SourceFileIdType,
    identifier: Vec<u8>,
}

impl SourceFile {
    /// Build a key from an already-canonical path.
    ///
    /// The path must be absolute and forward-slash separated; the identifier
    /// length must match `id_type` (see [`SourceFileIdType::byte_length`]).
    pub fn new(path: &str, id_type: SourceFileIdType, identifier: Vec<u8>) -> Result<Self> {
        if !path.starts_with('/') {
            return Err(CanonError::InvalidPath(format!("path must be absolute: {path}")));
        }
        if path.contains('\\') {
            return Err(CanonError::InvalidPath(format!(
                "path must use forward slashes: {path}"
            )));
        }
        if path.contains('\0') {
            return Err(CanonError::InvalidPath("embedded NUL character".to_string()));
        }
        if let Some(expected) = id_type.byte_length() {
            if identifier.len() != expected {
                return Err(CanonError::InvalidIdentifier {
                    id_type: id_type.name(),
                    reason: format!("expected {} bytes, got {}", expected, identifier.len()),
                });
            }
        }
        Ok(SourceFile { path: path.to_string(), id_type, identifier })
    }

    /// Build a key from a raw debug-info path, canonicalizing it first.
    pub fn from_raw_path(
        raw: &str,
        base_dir: &str,
        id_type: SourceFileIdType,
        identifier: Vec<u8>,
    ) -> Result<Self> {
        let canonical = canon::normalize(raw, base_dir)?;
        SourceFile::new(&canonical, id_type, identifier)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Final path segment.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn id_type(&self) -> SourceFileIdType {
        self.id_type
    }

    pub fn identifier(&self) -> &[u8] {
        &self.identifier
    }

    pub fn identifier_as_hex(&self) -> String {
        bytes_to_hex(&self.identifier)
    }
}

/// Minimum and maximum mapped line numbers for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLineBounds {
    min: u32,
    max: u32,
}

impl SourceLineBounds {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if max < min {
            return Err(CanonError::InvalidLineBounds { min, max });
        }
        Ok(SourceLineBounds { min, max })
    }

    /// Bounds over a set of mapped line numbers; `None` when empty.
    pub fn from_lines<I: IntoIterator<Item = u32>>(lines: I) -> Option<Self> {
        let mut iter = lines.into_iter();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for line in iter {
            min = min.min(line);
            max = max.max(line);
        }
        Some(SourceLineBounds { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_requires_absolute_path() {
        assert!(SourceFile::new("/src/a.c", SourceFileIdType::None, vec![]).is_ok());
        assert!(matches!(
            SourceFile::new("src/a.c", SourceFileIdType::None, vec![]).unwrap_err(),
            CanonError::InvalidPath(_)
        ));
        assert!(matches!(
            SourceFile::new("/src\\a.c", SourceFileIdType::None, vec![]).unwrap_err(),
            CanonError::InvalidPath(_)
        ));
    }

    #[test]
    fn test_identifier_length_checked_per_id_type() {
        assert!(SourceFile::new("/a.c", SourceFileIdType::Md5, vec![0; 16]).is_ok());
        assert!(SourceFile::new("/a.c", SourceFileIdType::Sha1, vec![0; 20]).is_ok());
        assert!(SourceFile::new("/a.c", SourceFileIdType::Timestamp64, vec![0; 8]).is_ok());
        let err = SourceFile::new("/a.c", SourceFileIdType::Md5, vec![0; 15]).unwrap_err();
        assert!(matches!(err, CanonError::InvalidIdentifier { id_type: "md5", .. }));
    }

    #[test]
    fn test_none_id_type_requires_empty_identifier() {
        assert!(SourceFile::new("/a.c", SourceFileIdType::None, vec![1]).is_err());
    }

    #[test]
    fn test_unknown_id_type_takes_any_length() {
        assert!(SourceFile::new("/a.c", SourceFileIdType::Unknown, vec![]).is_ok());
        assert!(SourceFile::new("/a.c", SourceFileIdType::Unknown, vec![0; 3]).is_ok());
    }

    #[test]
    fn test_from_raw_path_canonicalizes() {
        let sf =
            SourceFile::from_raw_path("./src\\a.c", "base", SourceFileIdType::None, vec![])
                .unwrap();
        assert_eq!(sf.path(), "/base/src/a.c");
        assert_eq!(sf.file_name(), "a.c");
    }

    #[test]
    fn test_keys_differ_by_identifier() {
        let a = SourceFile::new("/a.c", SourceFileIdType::Md5, vec![1; 16]).unwrap();
        let b = SourceFile::new("/a.c", SourceFileIdType::Md5, vec![2; 16]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.identifier_as_hex(), "01".repeat(16));
    }

    #[test]
    fn test_id_type_parses_case_insensitively() {
        assert_eq!("MD5".parse::<SourceFileIdType>().unwrap(), SourceFileIdType::Md5);
        assert_eq!("sha256".parse::<SourceFileIdType>().unwrap(), SourceFileIdType::Sha256);
        assert!("crc32".parse::<SourceFileIdType>().is_err());
    }

    #[test]
    fn test_line_bounds_ordering_enforced() {
        let bounds = SourceLineBounds::new(3, 10).unwrap();
        assert_eq!(bounds.min(), 3);
        assert_eq!(bounds.max(), 10);
        assert_eq!(
            SourceLineBounds::new(10, 3).unwrap_err(),
            CanonError::InvalidLineBounds { min: 10, max: 3 }
        );
    }

    #[test]
    fn test_line_bounds_from_lines() {
        assert_eq!(SourceLineBounds::from_lines([]), None);
        let bounds = SourceLineBounds::from_lines([7, 2, 40, 12]).unwrap();
        assert_eq!((bounds.min(), bounds.max()), (2, 40));
    }
}
