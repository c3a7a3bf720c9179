//! Classification of arbitrary identifiers against the catalog.
//!
//! This module is only available when the `lookup` feature is enabled.
//!
//! Two indexes back the lookups: a perfect-hash map over the canonical
//! registry strings, generated at compile time, and a hash map keyed by the
//! 16-byte value that is built once on first use.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use phf::phf_map;

use super::types::{DocumentType, ENTRIES};
use crate::common::error::{Error, Result};
use crate::common::id::Clsid;

/// Canonical registry string to document type
static BY_REG_GUID: phf::Map<&'static str, DocumentType> = phf_map! {
    // Part
    "4D29B490-49B2-11D0-93C3-7E0706000000" => DocumentType::InventorPartDocument,
    "9C464203-9BAE-11D3-8BAD-0060B0CE6BB4" => DocumentType::InventorSheetMetalPart,
    "92055419-B3FA-11D3-A479-00C04F6B9531" => DocumentType::InventorGenericProxyPart,
    "9C464204-9BAE-11D3-8BAD-0060B0CE6BB4" => DocumentType::InventorCompatibilityProxyPart,
    "9C88D3AF-C3EB-11D3-B79E-0060B0F159EF" => DocumentType::InventorCatalogProxyPart,
    "4D8D80D4-F5B0-4460-8CEA-4CD222684469" => DocumentType::InventorMoldedPart,

    // Assembly
    "E60F81E1-49B3-11D0-93C3-7E0706000000" => DocumentType::InventorAssemblyDocument,
    "28EC8354-9024-440F-A8A2-0E0E55D635B0" => DocumentType::InventorWeldment,

    // Other roots
    "BBF9FDF1-52DC-11D0-8C04-0800090BE8EC" => DocumentType::InventorDrawingDocument,
    "62FBB030-24C7-11D3-B78D-0060B0F159EF" => DocumentType::InventorDesignElementDocument,
    "76283A80-50DD-11D3-A7E3-00C04F79D7BC" => DocumentType::InventorPresentationDocument,
    "81B95C5D-8E31-4F65-9790-CCF6ECABD141" => DocumentType::InventorDesignViewDocument,
};

static BY_CLSID: Lazy<HashMap<Clsid, DocumentType>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|entry| (entry.clsid, entry.document_type))
        .collect()
});

/// Classify an identifier against the catalog.
///
/// Returns `None` for anything not in the catalog, including [`Clsid::NIL`].
pub fn classify(clsid: Clsid) -> Option<DocumentType> {
    let found = BY_CLSID.get(&clsid).copied();
    if found.is_none() {
        tracing::debug!(clsid = %clsid, "unrecognized document type");
    }
    found
}

/// Classify the 16 raw bytes read from a structured-storage root entry.
///
/// # Errors
///
/// [`Error::InvalidLength`] when `bytes` is not 16 bytes long, and
/// [`Error::UnrecognizedDocumentType`] when the identifier is not cataloged.
pub fn classify_ole_bytes(bytes: &[u8]) -> Result<DocumentType> {
    let clsid = Clsid::from_ole_bytes(bytes)?;
    classify(clsid).ok_or(Error::UnrecognizedDocumentType(clsid))
}

/// Resolve a textual identifier, e.g. a document's `SubType` property.
///
/// Input is normalized the way [`Clsid::parse`] describes, so lowercase,
/// braced and whitespace-padded forms resolve like the canonical one.
///
/// # Errors
///
/// A parse error for malformed input, or [`Error::UnrecognizedDocumentType`]
/// for a well-formed identifier that is not cataloged.
pub fn resolve(text: &str) -> Result<DocumentType> {
    let clsid = Clsid::parse(text)?;
    classify(clsid).ok_or(Error::UnrecognizedDocumentType(clsid))
}

/// Exact lookup of a canonical registry string, no normalization applied.
pub fn from_reg_guid(reg_guid: &str) -> Option<DocumentType> {
    BY_REG_GUID.get(reg_guid).copied()
}

impl DocumentType {
    /// See [`classify`].
    pub fn from_clsid(clsid: Clsid) -> Option<DocumentType> {
        classify(clsid)
    }
}

impl TryFrom<Clsid> for DocumentType {
    type Error = Error;

    fn try_from(clsid: Clsid) -> Result<Self> {
        classify(clsid).ok_or(Error::UnrecognizedDocumentType(clsid))
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        resolve(s)
    }
}
