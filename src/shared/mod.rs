//! Shared errors, utilities, and constants
//!
//! This module contains common errors, utilities, and constants used throughout
//! the library. It provides a centralized location for shared functionality.

pub mod constants;
pub mod error;
pub mod utils;

// Re-export shared components
pub use constants::*;
pub use error::*;
pub use utils::*;
