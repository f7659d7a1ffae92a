//! dwarf-canon: stable source-file registry keys from debug-info paths
//!
//! Compilers embed source paths in DWARF metadata in whatever form the build
//! used; this crate canonicalizes them into absolute, forward-slash paths
//! that are safe to use as registry keys, and carries the small pieces the
//! registry layer needs around them: identifier conversions, validated
//! source-file records, and the declarative processor-target table.

pub mod canon;
pub mod cli;
pub mod convert;
pub mod error;
pub mod registry;
pub mod source;

pub use canon::normalize;
pub use error::CanonError;
pub use source::{SourceFile, SourceFileIdType, SourceLineBounds};
