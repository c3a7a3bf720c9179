//! Catalog entry types and the static entry table.

use std::fmt;

use super::consts::*;
use uuid::Uuid;

use crate::common::id::Clsid;

/// Root document kind an entry belongs to.
///
/// Sub-types share the kind of their root document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentKind {
    /// Part document (.ipt)
    Part,
    /// Assembly document (.iam)
    Assembly,
    /// Drawing document (.idw, .dwg)
    Drawing,
    /// Design element (iFeature) document (.ide)
    DesignElement,
    /// Presentation document (.ipn)
    Presentation,
    /// Design view document
    DesignView,
}

/// Every document type and sub-type in the catalog.
///
/// Variant order matches [`ENTRIES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DocumentType {
    /// Part document, the root of every `.ipt` file
    InventorPartDocument = 0,
    /// Sheet metal part sub-type
    InventorSheetMetalPart = 1,
    /// Generic proxy part sub-type
    InventorGenericProxyPart = 2,
    /// Compatibility proxy part sub-type
    InventorCompatibilityProxyPart = 3,
    /// Catalog proxy part sub-type
    InventorCatalogProxyPart = 4,
    /// Molded part sub-type
    InventorMoldedPart = 5,
    /// Assembly document, the root of every `.iam` file
    InventorAssemblyDocument = 6,
    /// Weldment assembly sub-type
    InventorWeldment = 7,
    /// Drawing document
    InventorDrawingDocument = 8,
    /// Design element (iFeature) document
    InventorDesignElementDocument = 9,
    /// Presentation document
    InventorPresentationDocument = 10,
    /// Design view document
    InventorDesignViewDocument = 11,
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTypeEntry {
    /// Variant this row describes
    pub document_type: DocumentType,
    /// Stable symbolic name, e.g. `InventorPartDocument`
    pub symbol: &'static str,
    /// The 128-bit identifier
    pub clsid: Clsid,
    /// Display name
    pub name: &'static str,
    /// Registry string, uppercase 8-4-4-4-12
    pub reg_guid: &'static str,
    /// Root document kind
    pub kind: DocumentKind,
}

/// Number of entries in the catalog
pub const ENTRY_COUNT: usize = 12;

/// The flat catalog table.
pub static ENTRIES: [DocumentTypeEntry; ENTRY_COUNT] = TABLE;

const TABLE: [DocumentTypeEntry; ENTRY_COUNT] = [
    // Part and its sub-types
    DocumentTypeEntry {
        document_type: DocumentType::InventorPartDocument,
        symbol: "InventorPartDocument",
        clsid: CLSID_INVENTOR_PART_DOCUMENT,
        name: CLSID_INVENTOR_PART_DOCUMENT_NAME,
        reg_guid: CLSID_INVENTOR_PART_DOCUMENT_REG_GUID,
        kind: DocumentKind::Part,
    },
    DocumentTypeEntry {
        document_type: DocumentType::InventorSheetMetalPart,
        symbol: "InventorSheetMetalPart",
        clsid: CLSID_INVENTOR_SHEET_METAL_PART,
        name: CLSID_INVENTOR_SHEET_METAL_PART_NAME,
        reg_guid: CLSID_INVENTOR_SHEET_METAL_PART_REG_GUID,
        kind: DocumentKind::Part,
    },
    DocumentTypeEntry {
        document_type: DocumentType::InventorGenericProxyPart,
        symbol: "InventorGenericProxyPart",
        clsid: CLSID_INVENTOR_GENERIC_PROXY_PART,
        name: CLSID_INVENTOR_GENERIC_PROXY_PART_NAME,
        reg_guid: CLSID_INVENTOR_GENERIC_PROXY_PART_REG_GUID,
        kind: DocumentKind::Part,
    },
    DocumentTypeEntry {
        document_type: DocumentType::InventorCompatibilityProxyPart,
        symbol: "InventorCompatibilityProxyPart",
        clsid: CLSID_INVENTOR_COMPATIBILITY_PROXY_PART,
        name: CLSID_INVENTOR_COMPATIBILITY_PROXY_PART_NAME,
        reg_guid: CLSID_INVENTOR_COMPATIBILITY_PROXY_PART_REG_GUID,
        kind: DocumentKind::Part,
    },
    DocumentTypeEntry {
        document_type: DocumentType::InventorCatalogProxyPart,
        symbol: "InventorCatalogProxyPart",
        clsid: CLSID_INVENTOR_CATALOG_PROXY_PART,
        name: CLSID_INVENTOR_CATALOG_PROXY_PART_NAME,
        reg_guid: CLSID_INVENTOR_CATALOG_PROXY_PART_REG_GUID,
        kind: DocumentKind::Part,
    },
    DocumentTypeEntry {
        document_type: DocumentType::InventorMoldedPart,
        symbol: "InventorMoldedPart",
        clsid: CLSID_INVENTOR_MOLDED_PART,
        name: CLSID_INVENTOR_MOLDED_PART_NAME,
        reg_guid: CLSID_INVENTOR_MOLDED_PART_REG_GUID,
        kind: DocumentKind::Part,
    },
    // Assembly and its sub-types
    DocumentTypeEntry {
        document_type: DocumentType::InventorAssemblyDocument,
        symbol: "InventorAssemblyDocument",
        clsid: CLSID_INVENTOR_ASSEMBLY_DOCUMENT,
        name: CLSID_INVENTOR_ASSEMBLY_DOCUMENT_NAME,
        reg_guid: CLSID_INVENTOR_ASSEMBLY_DOCUMENT_REG_GUID,
        kind: DocumentKind::Assembly,
    },
    DocumentTypeEntry {
        document_type: DocumentType::InventorWeldment,
        symbol: "InventorWeldment",
        clsid: CLSID_INVENTOR_WELDMENT,
        name: CLSID_INVENTOR_WELDMENT_NAME,
        reg_guid: CLSID_INVENTOR_WELDMENT_REG_GUID,
        kind: DocumentKind::Assembly,
    },
    // Remaining root documents
    DocumentTypeEntry {
        document_type: DocumentType::InventorDrawingDocument,
        symbol: "InventorDrawingDocument",
        clsid: CLSID_INVENTOR_DRAWING_DOCUMENT,
        name: CLSID_INVENTOR_DRAWING_DOCUMENT_NAME,
        reg_guid: CLSID_INVENTOR_DRAWING_DOCUMENT_REG_GUID,
        kind: DocumentKind::Drawing,
    },
    DocumentTypeEntry {
        document_type: DocumentType::InventorDesignElementDocument,
        symbol: "InventorDesignElementDocument",
        clsid: CLSID_INVENTOR_DESIGN_ELEMENT_DOCUMENT,
        name: CLSID_INVENTOR_DESIGN_ELEMENT_DOCUMENT_NAME,
        reg_guid: CLSID_INVENTOR_DESIGN_ELEMENT_DOCUMENT_REG_GUID,
        kind: DocumentKind::DesignElement,
    },
    DocumentTypeEntry {
        document_type: DocumentType::InventorPresentationDocument,
        symbol: "InventorPresentationDocument",
        clsid: CLSID_INVENTOR_PRESENTATION_DOCUMENT,
        name: CLSID_INVENTOR_PRESENTATION_DOCUMENT_NAME,
        reg_guid: CLSID_INVENTOR_PRESENTATION_DOCUMENT_REG_GUID,
        kind: DocumentKind::Presentation,
    },
    DocumentTypeEntry {
        document_type: DocumentType::InventorDesignViewDocument,
        symbol: "InventorDesignViewDocument",
        clsid: CLSID_INVENTOR_DESIGN_VIEW_DOCUMENT,
        name: CLSID_INVENTOR_DESIGN_VIEW_DOCUMENT_NAME,
        reg_guid: CLSID_INVENTOR_DESIGN_VIEW_DOCUMENT_REG_GUID,
        kind: DocumentKind::DesignView,
    },
];

// A malformed table fails the build rather than misclassifying at runtime.
const _: () = assert!(rows_in_variant_order(&TABLE), "catalog rows out of variant order");
const _: () = assert!(clsids_distinct(&TABLE), "duplicate CLSID in document type catalog");
const _: () = assert!(reg_guids_match(&TABLE), "registry string does not match CLSID");

const fn rows_in_variant_order(table: &[DocumentTypeEntry]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if table[i].document_type as usize != i {
            return false;
        }
        i += 1;
    }
    true
}

const fn clsids_distinct(table: &[DocumentTypeEntry]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].clsid.as_u128() == table[j].clsid.as_u128() {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn reg_guids_match(table: &[DocumentTypeEntry]) -> bool {
    let mut i = 0;
    while i < table.len() {
        match Uuid::try_parse(table[i].reg_guid) {
            Ok(parsed) if parsed.as_u128() == table[i].clsid.as_u128() => {}
            _ => return false,
        }
        i += 1;
    }
    true
}

impl DocumentType {
    /// All document types in catalog order.
    pub const ALL: [DocumentType; ENTRY_COUNT] = [
        DocumentType::InventorPartDocument,
        DocumentType::InventorSheetMetalPart,
        DocumentType::InventorGenericProxyPart,
        DocumentType::InventorCompatibilityProxyPart,
        DocumentType::InventorCatalogProxyPart,
        DocumentType::InventorMoldedPart,
        DocumentType::InventorAssemblyDocument,
        DocumentType::InventorWeldment,
        DocumentType::InventorDrawingDocument,
        DocumentType::InventorDesignElementDocument,
        DocumentType::InventorPresentationDocument,
        DocumentType::InventorDesignViewDocument,
    ];

    /// The catalog row for this type.
    pub const fn entry(self) -> &'static DocumentTypeEntry {
        &ENTRIES[self as usize]
    }

    /// The 128-bit identifier.
    pub const fn clsid(self) -> Clsid {
        self.entry().clsid
    }

    /// Display name, e.g. `Autodesk Inventor Part`.
    pub const fn name(self) -> &'static str {
        self.entry().name
    }

    /// Registry string, uppercase 8-4-4-4-12 without braces.
    pub const fn reg_guid(self) -> &'static str {
        self.entry().reg_guid
    }

    /// Stable symbolic name, the variant name as a string.
    pub const fn symbol(self) -> &'static str {
        self.entry().symbol
    }

    /// Root document kind this entry belongs to.
    pub const fn kind(self) -> DocumentKind {
        self.entry().kind
    }

    /// The root document type this entry specializes, or itself for roots.
    pub const fn root(self) -> DocumentType {
        match self.kind() {
            DocumentKind::Part => DocumentType::InventorPartDocument,
            DocumentKind::Assembly => DocumentType::InventorAssemblyDocument,
            DocumentKind::Drawing => DocumentType::InventorDrawingDocument,
            DocumentKind::DesignElement => DocumentType::InventorDesignElementDocument,
            DocumentKind::Presentation => DocumentType::InventorPresentationDocument,
            DocumentKind::DesignView => DocumentType::InventorDesignViewDocument,
        }
    }

    /// Whether this entry is a sub-type GUID rather than a root storage CLSID.
    pub const fn is_sub_type(self) -> bool {
        self as u8 != self.root() as u8
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<DocumentType> for Clsid {
    fn from(document_type: DocumentType) -> Self {
        document_type.clsid()
    }
}
