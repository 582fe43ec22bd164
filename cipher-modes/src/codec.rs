//! Hex transport encoding for ciphertext

use crate::error::{CipherError, Result};

/// Lowercase hex, two characters per byte, no separators
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes hex in either case.
///
/// Anything other than `[0-9A-Fa-f]` pairs is rejected, including an odd
/// number of digits. The empty string decodes to no bytes.
pub fn from_hex(input: &str) -> Result<Vec<u8>> {
    hex::decode(input).map_err(|e| CipherError::InvalidHexInput(e.to_string()))
}
