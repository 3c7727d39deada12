//! HashText Core
//!
//! Text normalization and digest helpers.
//! Provides whitespace trimming utilities and hex-encoded cryptographic hashes in Rust.
//!
//! ## Architecture
//!
//! This library follows a simplified architecture focused on core functionality:
//!
//! - **Text**: Whitespace normalization (`trim`, `trim_all`)
//! - **Hashing**: Digest computation and hex formatting
//! - **Shared**: Common errors, constants, and utilities
//!
//! ## Design
//!
//! - Every operation is a pure, synchronous function of its input
//! - The hash primitive is selected through [`HashAlgorithm`], so it can be
//!   swapped without touching the text utilities
//! - Hex formatting is delegated to the `hex` crate via `shared::utils`
//!
//! ## Usage
//!
//! ```rust
//! use hashtext_core::{trim, trim_all, keccak_hash};
//!
//! assert_eq!(trim("  hello  "), "hello");
//! assert_eq!(trim_all("a b\tc\n"), "abc");
//!
//! // Keccak-256 of the UTF-8 bytes, 0x-prefixed lowercase hex
//! let digest = keccak_hash("abc");
//! assert_eq!(digest.len(), 2 + 64);
//! ```

// Re-export main modules for easy access
pub mod hashing;
pub mod shared;
pub mod text;

// Re-export main functions and types
pub use hashing::{keccak_hash, HashAlgorithm, HashManager, HashResult};
pub use shared::error::{HashTextError, HashTextResult};
pub use text::{trim, trim_all};

/// Initialize logging for the library
pub fn init() {
    env_logger::init();
    log::info!("hashtext-core initialized");
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "hashtext-core");
    }

    #[test]
    fn test_root_reexports() {
        assert_eq!(trim("  x  "), "x");
        assert_eq!(trim_all(" x y "), "xy");
        assert_eq!(keccak_hash("").len(), 2 + 64);
    }
}
