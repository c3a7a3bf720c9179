//! inventor-clsid - Autodesk Inventor document type identifiers
//!
//! The root storage of every Inventor file embeds a class identifier that
//! names its document type, and part and assembly documents carry a further
//! sub-type GUID. This crate provides those identifiers as compile-time
//! constants together with their registry strings and display names.
//!
//! # Features
//!
//! - **Catalog**: named constants and a typed table of all document types
//! - **Clsid**: a [`uuid::Uuid`] newtype with registry rendering, strict
//!   parsing and the structured-storage byte layout
//! - **Lookup** (`lookup`, on by default): classify raw bytes or strings
//! - **Part sub-types**: map a part's `SubType` onto [`PartType`]
//! - **Serde** (`serde`): serialize identifiers as hyphenated GUID strings
//!
//! # Example - Decoding a root storage CLSID
//!
//! ```
//! use inventor_clsid::{Clsid, DocumentType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 16 bytes as read from the root directory entry of an .ipt file
//! let root_clsid = [
//!     0x90, 0xB4, 0x29, 0x4D, 0xB2, 0x49, 0xD0, 0x11,
//!     0x93, 0xC3, 0x7E, 0x07, 0x06, 0x00, 0x00, 0x00,
//! ];
//! let clsid = Clsid::from_ole_bytes(&root_clsid)?;
//! let document_type = DocumentType::ALL.into_iter().find(|t| t.clsid() == clsid);
//! assert_eq!(document_type, Some(DocumentType::InventorPartDocument));
//! assert_eq!(clsid.to_string(), "4D29B490-49B2-11D0-93C3-7E0706000000");
//! # Ok(())
//! # }
//! ```
//!
//! With the `lookup` feature, `catalog::classify_ole_bytes` does the same in
//! one call and reports unrecognized identifiers as an error.
//!
//! # Example - Comparing against a constant
//!
//! ```
//! use inventor_clsid::Clsid;
//! use inventor_clsid::catalog::consts::{
//!     CLSID_INVENTOR_SHEET_METAL_PART, CLSID_INVENTOR_SHEET_METAL_PART_NAME,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sub_type: Clsid = "{9C464203-9BAE-11D3-8BAD-0060B0CE6BB4}".parse()?;
//! if sub_type == CLSID_INVENTOR_SHEET_METAL_PART {
//!     println!("{}", CLSID_INVENTOR_SHEET_METAL_PART_NAME);
//! }
//! # Ok(())
//! # }
//! ```

/// Common types: the [`Clsid`] value type and the unified error type
pub mod common;

/// Document type catalog
///
/// Named constants for every Inventor document CLSID and sub-type GUID,
/// plus classification when the `lookup` feature is enabled.
pub mod catalog;

/// Part document sub-types
pub mod part;

// Re-export commonly used types for convenience
pub use catalog::{DocumentKind, DocumentType, DocumentTypeEntry};
pub use common::{Clsid, Error, Result};
pub use part::PartType;
