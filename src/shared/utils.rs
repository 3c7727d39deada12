//! Utility functions for the library
//!
//! This module contains the hex formatting helpers used by the hashing layer.

use crate::shared::constants::HEX_PREFIX;
use crate::shared::error::{HashTextError, HashTextResult};

/// Convert bytes to a 0x-prefixed lowercase hex string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(bytes))
}

/// Convert a hex string to bytes
///
/// Accepts input with or without the `0x` prefix.
pub fn hex_to_bytes(hex: &str) -> HashTextResult<Vec<u8>> {
    let hex = hex.strip_prefix(HEX_PREFIX).unwrap_or(hex);
    hex::decode(hex)
        .map_err(|e| HashTextError::validation(format!("Invalid hex string: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_conversion() {
        let original = vec![1, 2, 3, 4, 5];
        let hex = bytes_to_hex(&original);
        let converted = hex_to_bytes(&hex)
            .expect("Failed to convert hex back to bytes");
        assert_eq!(original, converted);
    }

    #[test]
    fn test_bytes_to_hex_format() {
        assert_eq!(bytes_to_hex(&[]), "0x");
        assert_eq!(bytes_to_hex(&[0x00, 0xff, 0xab]), "0x00ffab");
    }

    #[test]
    fn test_hex_to_bytes_without_prefix() {
        assert_eq!(hex_to_bytes("00ffab").unwrap(), vec![0x00, 0xff, 0xab]);
    }

    #[test]
    fn test_hex_to_bytes_invalid() {
        assert!(hex_to_bytes("0xzz").is_err());
        assert!(hex_to_bytes("abc").is_err()); // Odd length
    }
}
