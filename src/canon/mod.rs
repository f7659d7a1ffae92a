//! Canonicalization of debug-info source paths.
//!
//! Compilers record source paths in DWARF metadata in whatever shape the
//! build happened to use: absolute, relative to the compilation directory,
//! Windows-separated (MinGW), or escaping the build tree through `..`
//! segments. The registry that keys source files by path needs one stable,
//! collision-free spelling per distinct input, so everything funnels through
//! [`normalize`] before being used as a key.
//!
//! The whole transformation is syntactic; no path here is ever checked
//! against a real filesystem.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CanonError, Result};

/// Characters not allowed in a synthetic root directory name.
static BASE_DIR_REJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid regex"));

/// Canonicalize a raw debug-info source path.
///
/// Relative paths (leading `./`) are made absolute under `/<base_dir>/`. If
/// resolving `..` segments consumes the injected root, the result is rebased
/// at `/<base_dir>_<n>` instead, where `n` counts how far the path escaped;
/// two inputs escaping by different routes must not collapse onto the same
/// canonical root. Backslashes are converted to forward slashes before
/// resolution (MinGW emits them), and redundant slash runs collapse.
///
/// Already-absolute paths that resolve without escaping are returned
/// unchanged, so canonical input is a fixed point.
///
/// # Arguments
/// * `path` - raw path string as found in the debug info
/// * `base_dir` - name of the artificial root directory for this import
///
/// # Errors
/// [`CanonError::EmptyBaseDir`] / [`CanonError::InvalidBaseDir`] when the
/// root name is empty or contains a character outside `[A-Za-z0-9_]`, and
/// [`CanonError::InvalidPath`] when `path` is not a valid path string.
pub fn normalize(path: &str, base_dir: &str) -> Result<String> {
    if base_dir.is_empty() {
        return Err(CanonError::EmptyBaseDir);
    }
    if BASE_DIR_REJECT.is_match(base_dir) {
        return Err(CanonError::InvalidBaseDir);
    }
    if path.contains('\0') {
        return Err(CanonError::InvalidPath("embedded NUL character".to_string()));
    }

    let mut based = false;
    let mut path = path.to_string();
    if let Some(rest) = path.strip_prefix("./") {
        path = format!("/{}/{}", base_dir, rest);
        based = true;
    }

    let path = normalize_separators(&path);
    let mut resolved = resolve_dot_segments(&path);

    // Any `..` remnant still anchored at the root counts one level of escape.
    let mut escape_depth = 0u32;
    loop {
        if resolved == "/.." {
            resolved.clear();
            escape_depth += 1;
        } else if resolved.starts_with("/../") {
            resolved.drain(..3);
            escape_depth += 1;
        } else {
            break;
        }
    }

    if escape_depth == 0 {
        if !based {
            // baseDir not necessary: path normalizes to an absolute path without it
            return Ok(resolved);
        }
        if resolved.strip_prefix('/').is_some_and(|r| r.starts_with(base_dir)) {
            // adding the initial /baseDir was sufficient
            return Ok(resolved);
        }
    }
    if based {
        // the injected baseDir segment was itself consumed by an interior ..
        escape_depth += 1;
    }
    let suffix = if escape_depth == 0 { String::new() } else { format!("_{}", escape_depth) };
    Ok(format!("/{}{}{}", base_dir, suffix, resolved))
}

/// Convert backslashes to forward slashes.
///
/// Cross-compiled toolchains (MinGW in particular) record native Windows
/// separators; the canonical form is forward-slash only.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Resolve `.` and `..` segments without touching the filesystem.
///
/// Follows the RFC 3986 `remove_dot_segments` shape: `.` disappears, `..`
/// cancels the nearest preceding real segment, and a `..` with nothing left
/// to cancel is dropped silently rather than kept as a literal remnant.
/// Empty segments (doubled slashes, trailing slash) are collapsed.
fn resolve_dot_segments(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // pop on empty is the silent drop: nothing left to cancel
                segments.pop();
            }
            real => segments.push(real),
        }
    }
    if absolute {
        let mut out = String::with_capacity(path.len());
        for segment in &segments {
            out.push('/');
            out.push_str(segment);
        }
        if out.is_empty() {
            // everything cancelled away; keep the root itself
            out.push('/');
        }
        out
    } else {
        segments.join("/")
    }
}
