//! The Autodesk Inventor document type catalog.
//!
//! [`consts`] holds the named identifier, registry string and display name
//! for every document type. [`DocumentType`] and [`ENTRIES`] expose the same
//! data as a typed table. With the `lookup` feature, arbitrary identifiers
//! can be classified against it.

/// Named CLSID, registry string and display name constants
pub mod consts;

/// Document type enumeration and the static entry table
mod types;

/// Classification of identifiers read from documents
#[cfg(feature = "lookup")]
pub mod lookup;

// Re-export public types for convenient access
pub use types::{DocumentKind, DocumentType, DocumentTypeEntry, ENTRIES, ENTRY_COUNT};

#[cfg(feature = "lookup")]
pub use lookup::{classify, classify_ole_bytes, from_reg_guid, resolve};
