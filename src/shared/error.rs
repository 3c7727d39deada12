//! Error handling for the library
//!
//! This module defines the error types used throughout the library.

use thiserror::Error;

/// Library error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashTextError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl HashTextError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a cryptographic error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Create an encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding(message.into())
    }
}

/// Result alias used across the library
pub type HashTextResult<T> = Result<T, HashTextError>;
