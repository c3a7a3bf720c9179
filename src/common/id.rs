//! The [`Clsid`] value type.
//!
//! A CLSID is a [`Uuid`] read the way `DEFINE_GUID` declares it: one 32-bit
//! field, two 16-bit fields and eight trailing bytes. The textual form is
//! the registry rendering, uppercase hex grouped 8-4-4-4-12. Structured-storage
//! files keep the first three fields little-endian, which is what
//! [`Clsid::from_ole_bytes`] decodes.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::common::error::{Error, Result};

/// Size of a CLSID in bytes
pub const CLSID_SIZE: usize = 16;

/// Length of the bare textual form, `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`
pub const TEXTUAL_LEN: usize = 36;

/// Byte offsets of the hyphens within the bare textual form
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// A 128-bit class identifier.
///
/// Ordering and hashing follow the textual order of the digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Clsid(Uuid);

impl Clsid {
    /// The all-zero identifier
    pub const NIL: Clsid = Clsid(Uuid::nil());

    /// Wrap a [`Uuid`], usually one declared with [`uuid::uuid!`].
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying [`Uuid`]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Build an identifier from its `DEFINE_GUID` fields.
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self(Uuid::from_fields(data1, data2, data3, &data4))
    }

    /// Build an identifier whose hex digits read as `value` in textual order.
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// The identifier as a single integer in textual digit order.
    pub const fn as_u128(&self) -> u128 {
        self.0.as_u128()
    }

    /// Build an identifier from 16 bytes in textual digit order.
    pub const fn from_be_bytes(bytes: [u8; CLSID_SIZE]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// The 16 bytes in textual digit order.
    pub const fn to_be_bytes(&self) -> [u8; CLSID_SIZE] {
        *self.0.as_bytes()
    }

    /// Decode the mixed-endian layout that structured storage writes.
    ///
    /// The first three fields are little-endian and the trailing eight bytes
    /// are copied as-is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `bytes` is exactly 16 bytes long.
    pub fn from_ole_bytes(bytes: &[u8]) -> Result<Self> {
        let uuid = Uuid::from_slice_le(bytes).map_err(|_| {
            tracing::trace!(len = bytes.len(), "rejected CLSID byte slice");
            Error::InvalidLength {
                expected: CLSID_SIZE,
                got: bytes.len(),
            }
        })?;
        Ok(Self(uuid))
    }

    /// Encode into the mixed-endian structured-storage layout.
    pub fn to_ole_bytes(&self) -> [u8; CLSID_SIZE] {
        self.0.to_bytes_le()
    }

    /// First field (`Data1`)
    pub fn data1(&self) -> u32 {
        self.0.as_fields().0
    }

    /// Second field (`Data2`)
    pub fn data2(&self) -> u16 {
        self.0.as_fields().1
    }

    /// Third field (`Data3`)
    pub fn data3(&self) -> u16 {
        self.0.as_fields().2
    }

    /// Trailing eight bytes (`Data4`)
    pub fn data4(&self) -> [u8; 8] {
        *self.0.as_fields().3
    }

    /// Whether every bit is zero.
    pub const fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Display adapter that wraps the textual form in braces.
    pub const fn braced(&self) -> Braced {
        Braced(*self)
    }

    /// Parse a textual identifier.
    ///
    /// Accepted input: surrounding ASCII whitespace is ignored, one pair of
    /// curly braces may wrap the identifier, and hex digits may use either
    /// case. Hyphens are required at the 8-4-4-4-12 group boundaries, so the
    /// simple and URN forms that [`Uuid::parse_str`] also takes are rejected.
    ///
    /// # Errors
    ///
    /// - [`Error::UnbalancedBrace`] when only one brace is present
    /// - [`Error::InvalidLength`] when the identifier is not 36 bytes
    /// - [`Error::InvalidCharacter`] for a misplaced hyphen, with the byte
    ///   index into `input`
    /// - [`Error::Uuid`] for a non-hex digit
    pub fn parse(input: &str) -> Result<Self> {
        let start = input.len() - input.trim_start_matches(|c: char| c.is_ascii_whitespace()).len();
        let trimmed = input.trim_matches(|c: char| c.is_ascii_whitespace());

        let (body, offset) = match (trimmed.starts_with('{'), trimmed.ends_with('}')) {
            (true, true) => (&trimmed[1..trimmed.len() - 1], start + 1),
            (false, false) => (trimmed, start),
            _ => return Err(Error::UnbalancedBrace),
        };

        if body.len() != TEXTUAL_LEN {
            return Err(Error::InvalidLength {
                expected: TEXTUAL_LEN,
                got: body.len(),
            });
        }

        for (index, found) in body.char_indices() {
            if HYPHENS.contains(&index) != (found == '-') {
                return Err(Error::InvalidCharacter {
                    found,
                    index: offset + index,
                });
            }
        }

        Ok(Self(Uuid::try_parse(body)?))
    }
}

impl fmt::Display for Clsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0.hyphenated(), f)
    }
}

impl fmt::Debug for Clsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clsid({self})")
    }
}

impl FromStr for Clsid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Uuid> for Clsid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<Clsid> for Uuid {
    fn from(clsid: Clsid) -> Self {
        clsid.0
    }
}

/// Braced rendering of a [`Clsid`]: `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Braced(Clsid);

impl fmt::Display for Braced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0.0.braced(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::uuid;

    const PART: Clsid = Clsid::from_fields(
        0x4D29B490,
        0x49B2,
        0x11D0,
        [0x93, 0xC3, 0x7E, 0x07, 0x06, 0x00, 0x00, 0x00],
    );

    #[test]
    fn test_fields_match_u128() {
        assert_eq!(PART, Clsid::from_u128(0x4D29B490_49B2_11D0_93C3_7E0706000000));
        assert_eq!(PART, Clsid::from_uuid(uuid!("4D29B490-49B2-11D0-93C3-7E0706000000")));
        assert_eq!(PART.as_u128(), 0x4D29B490_49B2_11D0_93C3_7E0706000000);
        assert_eq!(PART.data1(), 0x4D29B490);
        assert_eq!(PART.data2(), 0x49B2);
        assert_eq!(PART.data3(), 0x11D0);
        assert_eq!(PART.data4()[0], 0x93);
    }

    #[test]
    fn test_display_is_uppercase_registry_form() {
        assert_eq!(PART.to_string(), "4D29B490-49B2-11D0-93C3-7E0706000000");
        assert_eq!(
            PART.braced().to_string(),
            "{4D29B490-49B2-11D0-93C3-7E0706000000}"
        );
        assert_eq!(format!("{PART:?}"), "Clsid(4D29B490-49B2-11D0-93C3-7E0706000000)");
        assert_eq!(
            Clsid::from_u128(u128::MAX).to_string(),
            "FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF"
        );
    }

    #[test]
    fn test_parse_normalization() {
        for input in [
            "4D29B490-49B2-11D0-93C3-7E0706000000",
            "4d29b490-49b2-11d0-93c3-7e0706000000",
            "{4D29B490-49B2-11D0-93C3-7E0706000000}",
            "  {4d29B490-49B2-11D0-93C3-7E0706000000}\n",
            "\t4D29B490-49B2-11D0-93C3-7E0706000000 ",
        ] {
            assert_eq!(Clsid::parse(input), Ok(PART), "input {input:?}");
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Clsid::parse("{4D29B490-49B2-11D0-93C3-7E0706000000"),
            Err(Error::UnbalancedBrace)
        );
        assert_eq!(
            Clsid::parse("4D29B490-49B2-11D0-93C3-7E0706000000}"),
            Err(Error::UnbalancedBrace)
        );
        assert_eq!(
            Clsid::parse("4D29B490-49B2-11D0-93C3-7E070600000"),
            Err(Error::InvalidLength {
                expected: 36,
                got: 35
            })
        );
        assert_eq!(
            Clsid::parse(""),
            Err(Error::InvalidLength {
                expected: 36,
                got: 0
            })
        );
        assert!(matches!(
            Clsid::parse("4D29B490-49B2-11D0-93C3-7E070600000G"),
            Err(Error::Uuid(_))
        ));
        // Hyphen moved one position to the right
        assert_eq!(
            Clsid::parse(" 4D29B4904-9B2-11D0-93C3-7E0706000000"),
            Err(Error::InvalidCharacter {
                found: '4',
                index: 9
            })
        );
        // Simple and URN forms are valid UUIDs but not registry strings
        assert!(matches!(
            Clsid::parse("4D29B49049B211D093C37E0706000000"),
            Err(Error::InvalidLength { .. })
        ));
        assert!(Clsid::parse("urn:uuid:4D29B490-49B2-11D0-93C3-7E0706000000").is_err());
        // Inner whitespace is not tolerated
        assert!(Clsid::parse("4D29B490 49B2-11D0-93C3-7E0706000000").is_err());
    }

    #[test]
    fn test_parse_length_counts_bytes() {
        // 35 ASCII characters plus a two-byte 'é': 36 characters, 37 bytes
        let input = "4D29B490-49B2-11D0-93C3-7E070600000é";
        assert_eq!(input.chars().count(), 36);
        assert_eq!(
            Clsid::parse(input),
            Err(Error::InvalidLength {
                expected: 36,
                got: 37
            })
        );
    }

    #[test]
    fn test_ole_layout() {
        let on_disk = [
            0x90, 0xB4, 0x29, 0x4D, 0xB2, 0x49, 0xD0, 0x11, 0x93, 0xC3, 0x7E, 0x07, 0x06, 0x00,
            0x00, 0x00,
        ];
        assert_eq!(Clsid::from_ole_bytes(&on_disk), Ok(PART));
        assert_eq!(PART.to_ole_bytes(), on_disk);
        assert_ne!(PART.to_be_bytes(), on_disk);
        assert_eq!(Clsid::from_be_bytes(PART.to_be_bytes()), PART);
    }

    #[test]
    fn test_ole_layout_wrong_length() {
        assert_eq!(
            Clsid::from_ole_bytes(&[0u8; 15]),
            Err(Error::InvalidLength {
                expected: 16,
                got: 15
            })
        );
        assert!(Clsid::from_ole_bytes(&[0u8; 17]).is_err());
    }

    #[test]
    fn test_nil() {
        assert!(Clsid::NIL.is_nil());
        assert!(Clsid::default().is_nil());
        assert!(!PART.is_nil());
        assert_eq!(Clsid::NIL.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_ordering_follows_text() {
        let low = Clsid::parse("0FFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF").unwrap();
        let high = Clsid::parse("10000000-0000-0000-0000-000000000000").unwrap();
        assert!(low < high);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&PART).unwrap();
        let back: Clsid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PART);
        assert_eq!(json.to_uppercase(), "\"4D29B490-49B2-11D0-93C3-7E0706000000\"");
        assert!(serde_json::from_str::<Clsid>("\"not-a-clsid\"").is_err());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            #[test]
            fn text_round_trip(value in any::<u128>()) {
                let id = Clsid::from_u128(value);
                let text = id.to_string();
                prop_assert_eq!(Clsid::parse(&text), Ok(id));
                prop_assert_eq!(Clsid::parse(&text.to_lowercase()), Ok(id));
                prop_assert_eq!(Clsid::parse(&id.braced().to_string()), Ok(id));
                prop_assert_eq!(Clsid::parse(&text).unwrap().to_string(), text);
            }

            #[test]
            fn ole_round_trip(bytes in any::<[u8; 16]>()) {
                let id = Clsid::from_ole_bytes(&bytes).unwrap();
                prop_assert_eq!(id.to_ole_bytes(), bytes);
            }
        }
    }
}
