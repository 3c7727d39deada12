//! Digest computation over selectable algorithms

use super::{HashAlgorithm, HashResult};
use sha2::{Digest, Sha256, Sha512};
use sha3::{Keccak256, Keccak512};

/// Hash manager
///
/// Stateless dispatcher over the supported algorithms. Every method is a
/// pure function of its input and safe to call from any thread.
pub struct HashManager;

impl HashManager {
    pub fn new() -> Self {
        Self
    }

    /// Hash data with the specified algorithm
    pub fn hash(&self, data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
        match algorithm {
            HashAlgorithm::SHA256 => self.sha256(data),
            HashAlgorithm::SHA512 => self.sha512(data),
            HashAlgorithm::Keccak256 => self.keccak256(data),
            HashAlgorithm::Keccak512 => self.keccak512(data),
        }
    }

    /// Hash data with SHA-256
    pub fn sha256(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }

    /// Hash data with SHA-512
    pub fn sha512(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = Sha512::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }

    /// Hash data with Keccak-256
    pub fn keccak256(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = Keccak256::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }

    /// Hash data with Keccak-512
    pub fn keccak512(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = Keccak512::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }

    /// Hash to bare lowercase hex (no 0x prefix)
    pub fn hash_to_hex(&self, data: &[u8], algorithm: HashAlgorithm) -> String {
        hex::encode(self.hash(data, algorithm))
    }

    /// Hash to a [`HashResult`] carrying bytes and the 0x hex view
    pub fn hash_to_result(&self, data: &[u8], algorithm: HashAlgorithm) -> HashResult {
        HashResult::new(algorithm, self.hash(data, algorithm))
    }
}

impl Default for HashManager {
    fn default() -> Self {
        Self::new()
    }
}
