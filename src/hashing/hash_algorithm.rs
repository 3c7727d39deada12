//! Supported hash algorithms

use crate::shared::constants::{
    KECCAK256_DIGEST_SIZE, KECCAK512_DIGEST_SIZE, SHA256_DIGEST_SIZE, SHA512_DIGEST_SIZE,
};

/// Hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    SHA256,
    SHA512,
    Keccak256,
    Keccak512,
}

impl HashAlgorithm {
    /// Digest size in bytes
    pub fn digest_size(&self) -> usize {
        match self {
            HashAlgorithm::SHA256 => SHA256_DIGEST_SIZE,
            HashAlgorithm::SHA512 => SHA512_DIGEST_SIZE,
            HashAlgorithm::Keccak256 => KECCAK256_DIGEST_SIZE,
            HashAlgorithm::Keccak512 => KECCAK512_DIGEST_SIZE,
        }
    }

    /// Algorithm name
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::SHA256 => "SHA-256",
            HashAlgorithm::SHA512 => "SHA-512",
            HashAlgorithm::Keccak256 => "Keccak-256",
            HashAlgorithm::Keccak512 => "Keccak-512",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_sizes() {
        assert_eq!(HashAlgorithm::SHA256.digest_size(), 32);
        assert_eq!(HashAlgorithm::SHA512.digest_size(), 64);
        assert_eq!(HashAlgorithm::Keccak256.digest_size(), 32);
        assert_eq!(HashAlgorithm::Keccak512.digest_size(), 64);
    }

    #[test]
    fn test_names() {
        assert_eq!(HashAlgorithm::Keccak256.name(), "Keccak-256");
        assert_eq!(HashAlgorithm::SHA512.name(), "SHA-512");
    }
}
