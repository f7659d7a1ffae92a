//! Fixed-width and hex conversions for source-file identifiers.
//!
//! The registry stores identifiers (checksums, timestamps) as raw bytes;
//! these helpers move between that representation, 8-byte big-endian
//! integers, and the hex strings users type on the command line.

use crate::error::{CanonError, Result};

/// Convert a value to an 8-byte array, most significant byte first.
pub fn long_to_bytes(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Convert an 8-byte big-endian array back to a value.
///
/// # Errors
/// [`CanonError::BadLength`] if `bytes` is not exactly 8 bytes long.
pub fn bytes_to_long(bytes: &[u8]) -> Result<i64> {
    let fixed: [u8; 8] = bytes.try_into().map_err(|_| CanonError::BadLength {
        what: "bytes",
        expected: 8,
        actual: bytes.len(),
    })?;
    Ok(i64::from_be_bytes(fixed))
}

/// Parse a hex string into bytes.
///
/// An initial `0x` or `0X` is ignored, as is the case of the digits a-f.
/// A blank string yields an empty vector.
///
/// # Errors
/// [`CanonError::InvalidHex`] on a non-hex digit or an odd digit count.
pub fn hex_to_bytes(hex_string: &str) -> Result<Vec<u8>> {
    if hex_string.trim().is_empty() {
        return Ok(Vec::new());
    }
    let digits = hex_string
        .strip_prefix("0x")
        .or_else(|| hex_string.strip_prefix("0X"))
        .unwrap_or(hex_string);
    hex::decode(digits).map_err(|e| CanonError::InvalidHex(e.to_string()))
}

/// Format bytes as lowercase hex with no prefix. Empty input yields "".
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
