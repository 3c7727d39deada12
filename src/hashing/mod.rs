//! Hashing functionality for the library
//!
//! This module handles SHA-2 and Keccak digests and their hex formatting.
//! The digest computation comes from the `sha2`/`sha3` crates and the hex
//! formatting from the `hex` crate; neither is implemented here.

pub mod hash_algorithm;
pub mod hash_manager;

// Re-export all public items from submodules
pub use hash_algorithm::*;
pub use hash_manager::*;

use crate::shared::utils::bytes_to_hex;

/// Hash result wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashResult {
    pub algorithm: HashAlgorithm,
    pub hash: Vec<u8>,
    pub hex: String,
}

impl HashResult {
    /// Create a new hash result
    pub fn new(algorithm: HashAlgorithm, hash: Vec<u8>) -> Self {
        let hex = bytes_to_hex(&hash);
        Self { algorithm, hash, hex }
    }

    /// Get the hash as bytes
    pub fn bytes(&self) -> &[u8] {
        &self.hash
    }

    /// Get the hash as hex string
    pub fn hex(&self) -> &str {
        &self.hex
    }
}

/// Keccak-256 digest of a string, as 0x-prefixed lowercase hex
///
/// The input is hashed as its UTF-8 bytes. Deterministic: the same input
/// always produces the same 66-character output.
pub fn keccak_hash(input: &str) -> String {
    let manager = HashManager::new();
    let hash = manager.keccak256(input.as_bytes());
    bytes_to_hex(&hash)
}
