//! Invalid-argument taxonomy shared by the canonicalization and conversion
//! layers.
//!
//! Every failure here is synchronous and non-retryable: either a fully
//! normalized value is produced or the call returns one of these variants.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanonError {
    /// A relative path needs a synthetic root, but none was supplied.
    #[error("baseDir cannot be empty")]
    EmptyBaseDir,

    /// The synthetic root name must stay a single plain path segment.
    #[error("baseDir must consist of alphanumeric characters or underscores")]
    InvalidBaseDir,

    /// The input cannot be treated as a path string at all.
    #[error("path not valid: {0}")]
    InvalidPath(String),

    /// A fixed-width conversion got a slice of the wrong size.
    #[error("{what} must have length {expected}, got {actual}")]
    BadLength { what: &'static str, expected: usize, actual: usize },

    /// A hex string contained a non-hex digit or an odd number of digits.
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// An identifier kind name that is not in the taxonomy.
    #[error("unknown id type '{0}'")]
    UnknownIdType(String),

    /// A source-file identifier does not match its declared id type.
    #[error("identifier invalid for {id_type}: {reason}")]
    InvalidIdentifier { id_type: &'static str, reason: String },

    /// Line bounds where the maximum precedes the minimum.
    #[error("max line {max} must be greater than or equal to min line {min}")]
    InvalidLineBounds { min: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, CanonError>;
