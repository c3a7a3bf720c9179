//! Unified error type for identifier parsing and classification.
use thiserror::Error;

use crate::common::id::Clsid;

/// Main error type for inventor-clsid operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input has the wrong number of bytes
    #[error("Invalid length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// A hyphen is missing or sits in the wrong place
    #[error("Invalid character {found:?} at index {index}")]
    InvalidCharacter { found: char, index: usize },

    /// Hex digits rejected by the UUID parser
    #[error("Invalid identifier: {0}")]
    Uuid(#[from] uuid::Error),

    /// Opening brace without a closing one, or the other way around
    #[error("Unbalanced braces around identifier")]
    UnbalancedBrace,

    /// Well-formed identifier that is not part of the catalog
    #[error("Unrecognized document type: {0}")]
    UnrecognizedDocumentType(Clsid),
}

/// Result type for inventor-clsid operations.
pub type Result<T> = std::result::Result<T, Error>;
