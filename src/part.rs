//! Part document sub-types.
//!
//! A part document reports its specialization through the `SubType`
//! property, a braced GUID string such as
//! `{9C464203-9BAE-11D3-8BAD-0060B0CE6BB4}`. The helpers here map that
//! string onto [`PartType`] and answer the questions drawing tooling asks
//! about a part.

use std::fmt;

use crate::catalog::DocumentType;
use crate::common::id::Clsid;

/// Kinds of part document, keyed by sub-type GUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartType {
    /// Plain part; its sub-type equals the Part Document CLSID
    Generic,
    /// Sheet metal part
    SheetMetal,
    /// Generic proxy part
    GenericProxy,
    /// Compatibility proxy part
    CompatibilityProxy,
    /// Catalog proxy part
    CatalogProxy,
    /// Molded part
    Molded,
}

impl PartType {
    /// Every part type, in catalog order.
    pub const ALL: [PartType; 6] = [
        PartType::Generic,
        PartType::SheetMetal,
        PartType::GenericProxy,
        PartType::CompatibilityProxy,
        PartType::CatalogProxy,
        PartType::Molded,
    ];

    /// Part types that drawing generation supports.
    pub const SUPPORTED: [PartType; 2] = [PartType::Generic, PartType::SheetMetal];

    /// The catalog entry for this part type.
    pub const fn document_type(self) -> DocumentType {
        match self {
            PartType::Generic => DocumentType::InventorPartDocument,
            PartType::SheetMetal => DocumentType::InventorSheetMetalPart,
            PartType::GenericProxy => DocumentType::InventorGenericProxyPart,
            PartType::CompatibilityProxy => DocumentType::InventorCompatibilityProxyPart,
            PartType::CatalogProxy => DocumentType::InventorCatalogProxyPart,
            PartType::Molded => DocumentType::InventorMoldedPart,
        }
    }

    /// Sub-type GUID
    pub const fn id(self) -> Clsid {
        self.document_type().clsid()
    }

    /// Display name, e.g. `Autodesk Inventor Sheet Metal Part`
    pub const fn name(self) -> &'static str {
        self.document_type().name()
    }

    /// Whether drawing generation supports this part type.
    pub fn is_supported(self) -> bool {
        Self::SUPPORTED.contains(&self)
    }

    /// Map a document `SubType` string onto a part type.
    ///
    /// Braces, case and surrounding whitespace are ignored. Returns `None` for
    /// malformed strings and for GUIDs that are not part sub-types, such as
    /// the Weldment GUID.
    pub fn from_sub_type(sub_type: &str) -> Option<PartType> {
        let clsid = Clsid::parse(sub_type).ok()?;
        Self::from_clsid(clsid)
    }

    /// Map a sub-type GUID onto a part type.
    pub fn from_clsid(clsid: Clsid) -> Option<PartType> {
        Self::ALL.into_iter().find(|part_type| part_type.id() == clsid)
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl TryFrom<DocumentType> for PartType {
    type Error = DocumentType;

    /// Fails with the input when it is not a part entry.
    fn try_from(document_type: DocumentType) -> Result<Self, Self::Error> {
        Self::from_clsid(document_type.clsid()).ok_or(document_type)
    }
}

/// Display name for a part `SubType`, or the input itself when unknown.
pub fn sub_type_display_name(sub_type: &str) -> &str {
    PartType::from_sub_type(sub_type).map_or(sub_type, |part_type| part_type.name())
}

/// Whether the sub-type marks a plain (generic) part.
pub fn is_generic_part(sub_type: &str) -> bool {
    PartType::from_sub_type(sub_type) == Some(PartType::Generic)
}

/// Whether the sub-type marks a sheet metal part.
pub fn is_sheet_metal(sub_type: &str) -> bool {
    PartType::from_sub_type(sub_type) == Some(PartType::SheetMetal)
}

/// Whether a part is an MDF panel: a generic part whose file name contains
/// `MDF` in any case.
pub fn is_mdf(sub_type: &str, file_name: &str) -> bool {
    is_generic_part(sub_type) && file_name.to_uppercase().contains("MDF")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET_METAL_SUB_TYPE: &str = "{9C464203-9BAE-11D3-8BAD-0060B0CE6BB4}";
    const PART_SUB_TYPE: &str = "{4D29B490-49B2-11D0-93C3-7E0706000000}";

    #[test]
    fn test_supported_part_types() {
        assert_eq!(PartType::SUPPORTED, [PartType::Generic, PartType::SheetMetal]);
        assert!(PartType::SheetMetal.is_supported());
        assert!(!PartType::Molded.is_supported());
    }

    #[test]
    fn test_ids_and_names() {
        assert_eq!(
            PartType::Generic.id().to_string(),
            "4D29B490-49B2-11D0-93C3-7E0706000000"
        );
        assert_eq!(PartType::Generic.name(), "Autodesk Inventor Part");
        assert_eq!(
            PartType::CatalogProxy.id().to_string(),
            "9C88D3AF-C3EB-11D3-B79E-0060B0F159EF"
        );
        assert_eq!(PartType::Molded.name(), "Autodesk Inventor Molded Part Document");
        for part_type in PartType::ALL {
            assert_eq!(part_type.document_type().root(), DocumentType::InventorPartDocument);
        }
    }

    #[test]
    fn test_display_is_variant_name() {
        assert_eq!(PartType::SheetMetal.to_string(), "SheetMetal");
        assert_eq!(PartType::CompatibilityProxy.to_string(), "CompatibilityProxy");
    }

    #[test]
    fn test_from_sub_type() {
        assert_eq!(PartType::from_sub_type(SHEET_METAL_SUB_TYPE), Some(PartType::SheetMetal));
        assert_eq!(
            PartType::from_sub_type("9c88d3af-c3eb-11d3-b79e-0060b0f159ef"),
            Some(PartType::CatalogProxy)
        );
        // Weldment is an assembly sub-type
        assert_eq!(PartType::from_sub_type("{28EC8354-9024-440F-A8A2-0E0E55D635B0}"), None);
        assert_eq!(PartType::from_sub_type("not a guid"), None);
    }

    #[test]
    fn test_try_from_document_type() {
        assert_eq!(
            PartType::try_from(DocumentType::InventorMoldedPart),
            Ok(PartType::Molded)
        );
        assert_eq!(
            PartType::try_from(DocumentType::InventorDrawingDocument),
            Err(DocumentType::InventorDrawingDocument)
        );
    }

    #[test]
    fn test_sub_type_display_name() {
        assert_eq!(
            sub_type_display_name(SHEET_METAL_SUB_TYPE),
            "Autodesk Inventor Sheet Metal Part"
        );
        assert_eq!(
            sub_type_display_name("{00000000-0000-0000-0000-000000000001}"),
            "{00000000-0000-0000-0000-000000000001}"
        );
        assert_eq!(sub_type_display_name(""), "");
    }

    #[test]
    fn test_predicates() {
        assert!(is_generic_part(PART_SUB_TYPE));
        assert!(!is_generic_part(SHEET_METAL_SUB_TYPE));
        assert!(is_sheet_metal(SHEET_METAL_SUB_TYPE));
        assert!(!is_sheet_metal(PART_SUB_TYPE));
    }

    #[test]
    fn test_is_mdf() {
        assert!(is_mdf(PART_SUB_TYPE, r"C:\Work\Cabinet\Side panel mdf 18mm.ipt"));
        assert!(is_mdf(PART_SUB_TYPE, "MDF-back.ipt"));
        assert!(!is_mdf(PART_SUB_TYPE, "Side panel.ipt"));
        // Sheet metal parts are never MDF panels
        assert!(!is_mdf(SHEET_METAL_SUB_TYPE, "MDF-bracket.ipt"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        for part_type in PartType::ALL {
            let json = serde_json::to_string(&part_type).unwrap();
            assert_eq!(json, format!("\"{part_type}\""));
            let back: PartType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, part_type);
        }

        assert!(serde_json::from_str::<PartType>("\"Weldment\"").is_err());
    }
}
