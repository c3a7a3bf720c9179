//! Common types shared by the catalog and the part sub-type helpers.
//!
//! This module provides the [`Clsid`] value type and the unified error type.

// Submodule declarations
pub mod error;
pub mod id;

// Re-exports for convenience
pub use error::{Error, Result};
pub use id::{Braced, Clsid};
