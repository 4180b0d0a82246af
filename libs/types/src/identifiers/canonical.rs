//! # Canonical UUIDs - Base-UUID Expansion and Syntax Validation
//!
//! ## Purpose
//!
//! Value type for 128-bit GATT identifiers in their only accepted text form,
//! the lowercase hyphenated 8-4-4-4-12 layout. Short 16/32-bit aliases are
//! embedded into the Bluetooth base UUID `00000000-0000-1000-8000-00805f9b34fb`
//! at bits 96..128, so `0x2a19` becomes `00002a19-0000-1000-8000-00805f9b34fb`.
//!
//! ## Syntax Rules
//!
//! - Exactly 36 characters
//! - Hyphens at positions 8, 13, 18 and 23, nowhere else
//! - Every other position is an ASCII hex digit, either case
//! - Parsed values always print in lowercase
//!
//! The `uuid` crate accepts simple, braced and URN forms as well, so the
//! layout is checked here before a value is handed to it.

use crate::common::errors::FormatViolation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Bluetooth base UUID used for 16-bit and 32-bit aliases
pub const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

/// Length of a hyphenated UUID string
pub const UUID_STRING_LEN: usize = 36;

const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Mask selecting the 96 low bits shared by every base-derived UUID
const BASE_MASK: u128 = (1 << 96) - 1;

/// A 128-bit GATT UUID in canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalUuid(Uuid);

impl CanonicalUuid {
    /// The base UUID itself (alias 0)
    pub const BASE: CanonicalUuid = CanonicalUuid::from_alias(0);

    /// Embed a 16-bit or 32-bit alias into the base UUID
    pub const fn from_alias(alias: u32) -> Self {
        Self(Uuid::from_u128(((alias as u128) << 96) | BLUETOOTH_BASE_UUID))
    }

    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Parse a hyphenated UUID string, accepting uppercase hex
    pub fn parse(candidate: &str) -> Result<Self, FormatViolation> {
        check_uuid_syntax(candidate)?;
        // Unreachable once the layout check passes
        Uuid::try_parse(candidate)
            .map(Self)
            .map_err(|_| FormatViolation::WrongLength {
                expected: UUID_STRING_LEN,
                actual: candidate.len(),
            })
    }

    pub fn as_u128(&self) -> u128 {
        self.0.as_u128()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// True when the low 96 bits match the base UUID
    pub fn is_base_derived(&self) -> bool {
        self.as_u128() & BASE_MASK == BLUETOOTH_BASE_UUID
    }

    /// Recover the 32-bit alias of a base-derived UUID
    pub fn as_alias(&self) -> Option<u32> {
        self.is_base_derived().then(|| (self.as_u128() >> 96) as u32)
    }

    /// Recover the alias only when it fits in 16 bits
    pub fn as_short_alias(&self) -> Option<u16> {
        self.as_alias().and_then(|alias| u16::try_from(alias).ok())
    }
}

impl fmt::Display for CanonicalUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for CanonicalUuid {
    type Err = FormatViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CanonicalUuid {
    type Error = FormatViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CanonicalUuid> for String {
    fn from(value: CanonicalUuid) -> Self {
        value.to_string()
    }
}

impl From<Uuid> for CanonicalUuid {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Embed a 16-bit or 32-bit alias into the base UUID template
///
/// Range checking belongs to the caller; any `u32` is accepted.
pub fn expand_alias(alias: u32) -> CanonicalUuid {
    CanonicalUuid::from_alias(alias)
}

/// Expand an alias after reducing it to its low 32 bits
///
/// Mirrors the `unsigned long` conversion applied by `canonicalUUID()`,
/// so `0xADEADBEEF` expands to `deadbeef-0000-1000-8000-00805f9b34fb`.
pub fn expand_alias_wrapping(raw: u64) -> CanonicalUuid {
    expand_alias(raw as u32)
}

/// Pure syntactic check for the canonical 8-4-4-4-12 layout
pub fn is_valid_uuid(candidate: &str) -> bool {
    check_uuid_syntax(candidate).is_ok()
}

/// Report the first layout violation in `candidate`, if any
pub fn check_uuid_syntax(candidate: &str) -> Result<(), FormatViolation> {
    let actual = candidate.chars().count();
    if actual != UUID_STRING_LEN {
        return Err(FormatViolation::WrongLength {
            expected: UUID_STRING_LEN,
            actual,
        });
    }

    for (position, character) in candidate.chars().enumerate() {
        let hyphen_slot = HYPHEN_POSITIONS.contains(&position);
        match character {
            '-' if hyphen_slot => {}
            '-' => return Err(FormatViolation::MisplacedHyphen { position }),
            _ if hyphen_slot => return Err(FormatViolation::MisplacedHyphen { position }),
            c if c.is_ascii_hexdigit() => {}
            c => {
                return Err(FormatViolation::NonHexCharacter {
                    position,
                    character: c,
                })
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_16_bit_alias() {
        assert_eq!(
            expand_alias(0x180d).to_string(),
            "0000180d-0000-1000-8000-00805f9b34fb"
        );
        assert_eq!(
            expand_alias(0x2a19).to_string(),
            "00002a19-0000-1000-8000-00805f9b34fb"
        );
    }

    #[test]
    fn test_expand_32_bit_alias() {
        assert_eq!(
            expand_alias(0xAABBCCDD).to_string(),
            "aabbccdd-0000-1000-8000-00805f9b34fb"
        );
        assert_eq!(CanonicalUuid::BASE.to_string(), "00000000-0000-1000-8000-00805f9b34fb");
    }

    #[test]
    fn test_expand_wrapping_keeps_low_32_bits() {
        assert_eq!(
            expand_alias_wrapping(0xADEADBEEF).to_string(),
            "deadbeef-0000-1000-8000-00805f9b34fb"
        );
        assert_eq!(expand_alias_wrapping(0x2a19), expand_alias(0x2a19));
    }

    #[test]
    fn test_parse_normalizes_case() {
        let upper = CanonicalUuid::parse("1A2B3C4D-5E6F-7A8B-9C0D-1E2F3A4B5C6D").unwrap();
        assert_eq!(upper.to_string(), "1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d");
        let lower = CanonicalUuid::parse("1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_matches_alias_expansion() {
        let parsed = CanonicalUuid::parse("00002A19-0000-1000-8000-00805F9B34FB").unwrap();
        assert_eq!(parsed, CanonicalUuid::from_alias(0x2a19));
        assert_eq!(parsed.as_u128(), 0x00002a19_0000_1000_8000_00805f9b34fb);
    }

    #[test]
    fn test_alias_recovery() {
        let uuid = CanonicalUuid::parse("00002a19-0000-1000-8000-00805f9b34fb").unwrap();
        assert!(uuid.is_base_derived());
        assert_eq!(uuid.as_alias(), Some(0x2a19));
        assert_eq!(uuid.as_short_alias(), Some(0x2a19));

        let wide = expand_alias(0xdeadbeef);
        assert_eq!(wide.as_alias(), Some(0xdeadbeef));
        assert_eq!(wide.as_short_alias(), None);

        let custom = CanonicalUuid::parse("611c954a-263b-4f4a-aab6-01ddb953f985").unwrap();
        assert_eq!(custom.as_alias(), None);
    }

    #[test]
    fn test_syntax_violations() {
        assert_eq!(
            check_uuid_syntax("11"),
            Err(FormatViolation::WrongLength {
                expected: 36,
                actual: 2
            })
        );
        // 13-digit first group keeps the total length at 36
        assert_eq!(
            check_uuid_syntax("1234567891000-1000-8000-00805f9b34fb"),
            Err(FormatViolation::MisplacedHyphen { position: 8 })
        );
        assert_eq!(
            check_uuid_syntax("0000000g-0000-1000-8000-00805f9b34fb"),
            Err(FormatViolation::NonHexCharacter {
                position: 7,
                character: 'g'
            })
        );
        assert!(check_uuid_syntax("00000000-0000-0000-0000-000000000000").is_ok());
    }

    #[test]
    fn test_non_ascii_is_rejected_not_panicking() {
        let candidate = "0000000é-0000-1000-8000-00805f9b34fb";
        assert_eq!(
            check_uuid_syntax(candidate),
            Err(FormatViolation::NonHexCharacter {
                position: 7,
                character: 'é'
            })
        );
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let uuid = expand_alias(0x2a19);
        let json = serde_json::to_string(&uuid).unwrap();
        assert_eq!(json, "\"00002a19-0000-1000-8000-00805f9b34fb\"");

        let parsed: CanonicalUuid =
            serde_json::from_str("\"00002A19-0000-1000-8000-00805F9B34FB\"").unwrap();
        assert_eq!(parsed, uuid);

        let rejected: Result<CanonicalUuid, _> = serde_json::from_str("\"00002a19\"");
        assert!(rejected.is_err());
    }
}
