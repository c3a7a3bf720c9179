//! Document type identifiers for Autodesk Inventor.
//!
//! The root storage of an Inventor file embeds one of the document CLSIDs
//! below. Part and assembly documents are further specialized by a sub-type
//! GUID that the document exposes as its `SubType` property.
//!
//! Every entry comes as a triple: the identifier, its registry string and
//! its display name.

use uuid::uuid;

use crate::common::id::Clsid;

// Part Document

/// Part Document's CLSID, `{4D29B490-49B2-11D0-93C3-7E0706000000}`
pub const CLSID_INVENTOR_PART_DOCUMENT: Clsid =
    Clsid::from_uuid(uuid!("4D29B490-49B2-11D0-93C3-7E0706000000"));
pub const CLSID_INVENTOR_PART_DOCUMENT_REG_GUID: &str = "4D29B490-49B2-11D0-93C3-7E0706000000";
pub const CLSID_INVENTOR_PART_DOCUMENT_NAME: &str = "Autodesk Inventor Part";

// Part Document sub-types

/// Sheet Metal, `{9C464203-9BAE-11D3-8BAD-0060B0CE6BB4}`
pub const CLSID_INVENTOR_SHEET_METAL_PART: Clsid =
    Clsid::from_uuid(uuid!("9C464203-9BAE-11D3-8BAD-0060B0CE6BB4"));
pub const CLSID_INVENTOR_SHEET_METAL_PART_REG_GUID: &str = "9C464203-9BAE-11D3-8BAD-0060B0CE6BB4";
pub const CLSID_INVENTOR_SHEET_METAL_PART_NAME: &str = "Autodesk Inventor Sheet Metal Part";

/// Generic Proxy, `{92055419-B3FA-11D3-A479-00C04F6B9531}`
pub const CLSID_INVENTOR_GENERIC_PROXY_PART: Clsid =
    Clsid::from_uuid(uuid!("92055419-B3FA-11D3-A479-00C04F6B9531"));
pub const CLSID_INVENTOR_GENERIC_PROXY_PART_REG_GUID: &str = "92055419-B3FA-11D3-A479-00C04F6B9531";
pub const CLSID_INVENTOR_GENERIC_PROXY_PART_NAME: &str = "Autodesk Inventor Generic Proxy Part";

/// Compatibility Proxy, `{9C464204-9BAE-11D3-8BAD-0060B0CE6BB4}`
pub const CLSID_INVENTOR_COMPATIBILITY_PROXY_PART: Clsid =
    Clsid::from_uuid(uuid!("9C464204-9BAE-11D3-8BAD-0060B0CE6BB4"));
pub const CLSID_INVENTOR_COMPATIBILITY_PROXY_PART_REG_GUID: &str =
    "9C464204-9BAE-11D3-8BAD-0060B0CE6BB4";
pub const CLSID_INVENTOR_COMPATIBILITY_PROXY_PART_NAME: &str =
    "Autodesk Inventor Compatibility Proxy Part";

/// Catalog Proxy, `{9C88D3AF-C3EB-11D3-B79E-0060B0F159EF}`
pub const CLSID_INVENTOR_CATALOG_PROXY_PART: Clsid =
    Clsid::from_uuid(uuid!("9C88D3AF-C3EB-11D3-B79E-0060B0F159EF"));
pub const CLSID_INVENTOR_CATALOG_PROXY_PART_REG_GUID: &str = "9C88D3AF-C3EB-11D3-B79E-0060B0F159EF";
pub const CLSID_INVENTOR_CATALOG_PROXY_PART_NAME: &str = "Autodesk Inventor Catalog Proxy Part";

/// Molded Part, `{4D8D80D4-F5B0-4460-8CEA-4CD222684469}`
pub const CLSID_INVENTOR_MOLDED_PART: Clsid =
    Clsid::from_uuid(uuid!("4D8D80D4-F5B0-4460-8CEA-4CD222684469"));
pub const CLSID_INVENTOR_MOLDED_PART_REG_GUID: &str = "4D8D80D4-F5B0-4460-8CEA-4CD222684469";
pub const CLSID_INVENTOR_MOLDED_PART_NAME: &str = "Autodesk Inventor Molded Part Document";

// Assembly Document

/// Assembly Document's CLSID, `{E60F81E1-49B3-11D0-93C3-7E0706000000}`
pub const CLSID_INVENTOR_ASSEMBLY_DOCUMENT: Clsid =
    Clsid::from_uuid(uuid!("E60F81E1-49B3-11D0-93C3-7E0706000000"));
pub const CLSID_INVENTOR_ASSEMBLY_DOCUMENT_REG_GUID: &str = "E60F81E1-49B3-11D0-93C3-7E0706000000";
pub const CLSID_INVENTOR_ASSEMBLY_DOCUMENT_NAME: &str = "Autodesk Inventor Assembly";

// Assembly Document sub-types

/// Weldment, `{28EC8354-9024-440F-A8A2-0E0E55D635B0}`
pub const CLSID_INVENTOR_WELDMENT: Clsid =
    Clsid::from_uuid(uuid!("28EC8354-9024-440F-A8A2-0E0E55D635B0"));
pub const CLSID_INVENTOR_WELDMENT_REG_GUID: &str = "28EC8354-9024-440F-A8A2-0E0E55D635B0";
pub const CLSID_INVENTOR_WELDMENT_NAME: &str = "Autodesk Inventor Weldment";

// Drawing Document

/// Drawing Document's CLSID, `{BBF9FDF1-52DC-11D0-8C04-0800090BE8EC}`
pub const CLSID_INVENTOR_DRAWING_DOCUMENT: Clsid =
    Clsid::from_uuid(uuid!("BBF9FDF1-52DC-11D0-8C04-0800090BE8EC"));
pub const CLSID_INVENTOR_DRAWING_DOCUMENT_REG_GUID: &str = "BBF9FDF1-52DC-11D0-8C04-0800090BE8EC";
pub const CLSID_INVENTOR_DRAWING_DOCUMENT_NAME: &str = "Autodesk Inventor Drawing";

// Design Element Document

/// Design Element (iFeature) Document's CLSID, `{62FBB030-24C7-11D3-B78D-0060B0F159EF}`
pub const CLSID_INVENTOR_DESIGN_ELEMENT_DOCUMENT: Clsid =
    Clsid::from_uuid(uuid!("62FBB030-24C7-11D3-B78D-0060B0F159EF"));
pub const CLSID_INVENTOR_DESIGN_ELEMENT_DOCUMENT_REG_GUID: &str =
    "62FBB030-24C7-11D3-B78D-0060B0F159EF";
pub const CLSID_INVENTOR_DESIGN_ELEMENT_DOCUMENT_NAME: &str = "Autodesk Inventor iFeature";

// Presentation Document

/// Presentation Document's CLSID, `{76283A80-50DD-11D3-A7E3-00C04F79D7BC}`
pub const CLSID_INVENTOR_PRESENTATION_DOCUMENT: Clsid =
    Clsid::from_uuid(uuid!("76283A80-50DD-11D3-A7E3-00C04F79D7BC"));
pub const CLSID_INVENTOR_PRESENTATION_DOCUMENT_REG_GUID: &str =
    "76283A80-50DD-11D3-A7E3-00C04F79D7BC";
pub const CLSID_INVENTOR_PRESENTATION_DOCUMENT_NAME: &str = "Autodesk Inventor Presentation";

// Design View Document

/// Design View Document's CLSID, `{81B95C5D-8E31-4F65-9790-CCF6ECABD141}`
pub const CLSID_INVENTOR_DESIGN_VIEW_DOCUMENT: Clsid =
    Clsid::from_uuid(uuid!("81B95C5D-8E31-4F65-9790-CCF6ECABD141"));
pub const CLSID_INVENTOR_DESIGN_VIEW_DOCUMENT_REG_GUID: &str =
    "81B95C5D-8E31-4F65-9790-CCF6ECABD141";
pub const CLSID_INVENTOR_DESIGN_VIEW_DOCUMENT_NAME: &str = "Autodesk Inventor Design View";
