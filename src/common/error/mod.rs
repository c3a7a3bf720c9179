//! Unified error types for inventor-clsid.
//!
//! Parsing, byte decoding and classification all report through the same
//! [`Error`] enum so callers can match on one type.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
