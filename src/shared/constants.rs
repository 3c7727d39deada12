//! Constants for the library
//!
//! This module contains all constants used throughout the library.

// Digest sizes in bytes
pub const SHA256_DIGEST_SIZE: usize = 32;
pub const SHA512_DIGEST_SIZE: usize = 64;
pub const KECCAK256_DIGEST_SIZE: usize = 32;
pub const KECCAK512_DIGEST_SIZE: usize = 64;

// Hex formatting
pub const HEX_PREFIX: &str = "0x";
pub const HEX_CHARS_PER_BYTE: usize = 2;
