//! # GATT Identifiers - Alias, Name and UUID Representations
//!
//! ## Purpose
//!
//! A GATT service, characteristic or descriptor can be addressed three ways:
//! by numeric alias (`0x2a19`), by canonical name (`battery_level`) or by full
//! UUID (`00002a19-0000-1000-8000-00805f9b34fb`). Conformance scenarios are run
//! once per representation to prove the system under test treats them alike,
//! so the representation is carried as a closed [`Identifier`] variant and a
//! single resolver dispatches on it.
//!
//! ## Architecture Role
//!
//! ```text
//! Catalog entry → [Identifier] → IdentifierRegistry::resolve → IdentifierRecord
//!      ↑               ↓                    ↓                        ↓
//!  0x2a19         Alias(u64)          range + expansion         kind, alias,
//!  "battery_level" Name(String)       exact name lookup         name, uuid
//!  "00002a19-…"   Uuid(String)        syntax + uuid lookup
//! ```
//!
//! ## Text Classification
//!
//! Free text (a CLI argument, a string field in a catalog) becomes a
//! [`Identifier::Uuid`] attempt when it consists only of hex digits and hyphens,
//! and a [`Identifier::Name`] otherwise. `"11"` and `"deadbeef"` are therefore
//! malformed UUIDs, while `"not_a_characteristic_name"` is an unknown name.

pub mod assigned_numbers;
pub mod canonical;

pub use canonical::{
    check_uuid_syntax, expand_alias, expand_alias_wrapping, is_valid_uuid, CanonicalUuid,
    BLUETOOTH_BASE_UUID, UUID_STRING_LEN,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of an entity in the GATT hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Service,
    Characteristic,
    Descriptor,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 3] = [
        AttributeKind::Service,
        AttributeKind::Characteristic,
        AttributeKind::Descriptor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::Service => "service",
            AttributeKind::Characteristic => "characteristic",
            AttributeKind::Descriptor => "descriptor",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "service" => Ok(AttributeKind::Service),
            "characteristic" => Ok(AttributeKind::Characteristic),
            "descriptor" => Ok(AttributeKind::Descriptor),
            other => Err(format!(
                "unknown attribute kind '{}': expected service, characteristic or descriptor",
                other
            )),
        }
    }
}

/// One way of naming a GATT entity
///
/// `Alias` is wider than 32 bits so out-of-range inputs survive until
/// resolution rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "form", content = "value", rename_all = "lowercase")]
pub enum Identifier {
    Alias(u64),
    Name(String),
    Uuid(String),
}

impl Identifier {
    pub fn alias(value: u64) -> Self {
        Identifier::Alias(value)
    }

    pub fn name(name: impl Into<String>) -> Self {
        Identifier::Name(name.into())
    }

    pub fn uuid(uuid: impl Into<String>) -> Self {
        Identifier::Uuid(uuid.into())
    }

    /// Classify free text as a UUID attempt or a name
    ///
    /// GATT names use `_` and `.` but never `-`, so any hyphenated text is a
    /// UUID attempt, as is text made only of hex digits.
    pub fn classify(text: &str) -> Self {
        let uuid_like = text.contains('-')
            || (!text.is_empty() && text.chars().all(|c| c.is_ascii_hexdigit()));
        if uuid_like {
            Identifier::Uuid(text.to_string())
        } else {
            Identifier::Name(text.to_string())
        }
    }

    pub fn form(&self) -> &'static str {
        match self {
            Identifier::Alias(_) => "alias",
            Identifier::Name(_) => "name",
            Identifier::Uuid(_) => "uuid",
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Alias(value) => write!(f, "{:#06x}", value),
            Identifier::Name(name) => f.write_str(name),
            Identifier::Uuid(uuid) => f.write_str(uuid),
        }
    }
}

impl From<&str> for Identifier {
    fn from(text: &str) -> Self {
        Identifier::classify(text)
    }
}

impl From<CanonicalUuid> for Identifier {
    fn from(uuid: CanonicalUuid) -> Self {
        Identifier::Uuid(uuid.to_string())
    }
}

/// Canonical record for one registered GATT entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierRecord {
    pub kind: AttributeKind,
    pub alias: Option<u32>,
    pub name: Option<String>,
    /// Declared uuid, or the expansion of `alias` when none was declared
    pub uuid: Option<CanonicalUuid>,
}

impl IdentifierRecord {
    /// The name if present, else the uuid, else the alias
    pub fn label(&self) -> String {
        match (&self.name, &self.uuid, self.alias) {
            (Some(name), _, _) => name.clone(),
            (None, Some(uuid), _) => uuid.to_string(),
            (None, None, Some(alias)) => format!("{:#06x}", alias),
            (None, None, None) => String::from("<empty>"),
        }
    }

    /// Every representation this record answers to
    pub fn identifiers(&self) -> Vec<Identifier> {
        let mut forms = Vec::with_capacity(3);
        if let Some(alias) = self.alias {
            forms.push(Identifier::Alias(alias as u64));
        }
        if let Some(name) = &self.name {
            forms.push(Identifier::Name(name.clone()));
        }
        if let Some(uuid) = self.uuid {
            forms.push(Identifier::from(uuid));
        }
        forms
    }
}

impl fmt::Display for IdentifierRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.label())?;
        if let Some(uuid) = self.uuid {
            if self.name.is_some() {
                write!(f, " ({})", uuid)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_text() {
        assert_eq!(
            Identifier::classify("battery_level"),
            Identifier::Name("battery_level".to_string())
        );
        assert_eq!(
            Identifier::classify("gap.device_name"),
            Identifier::Name("gap.device_name".to_string())
        );
        assert_eq!(Identifier::classify("11"), Identifier::Uuid("11".to_string()));
        assert_eq!(
            Identifier::classify("1234567891000-1000-8000-00805f9b34fb"),
            Identifier::Uuid("1234567891000-1000-8000-00805f9b34fb".to_string())
        );
        assert_eq!(
            Identifier::classify("0000000g-0000-1000-8000-00805f9b34fb"),
            Identifier::Uuid("0000000g-0000-1000-8000-00805f9b34fb".to_string())
        );
        assert_eq!(
            Identifier::classify("heart-rate"),
            Identifier::Uuid("heart-rate".to_string())
        );
        assert_eq!(Identifier::classify(""), Identifier::Name(String::new()));
    }

    #[test]
    fn test_identifier_display() {
        assert_eq!(Identifier::alias(0x2a19).to_string(), "0x2a19");
        assert_eq!(Identifier::alias(0xfffffffff).to_string(), "0xfffffffff");
        assert_eq!(Identifier::name("heart_rate").to_string(), "heart_rate");
    }

    #[test]
    fn test_attribute_kind_round_trip() {
        for kind in AttributeKind::ALL {
            assert_eq!(kind.as_str().parse::<AttributeKind>(), Ok(kind));
        }
        assert!("attribute".parse::<AttributeKind>().is_err());
    }

    #[test]
    fn test_record_identifiers() {
        let record = IdentifierRecord {
            kind: AttributeKind::Characteristic,
            alias: Some(0x2a19),
            name: Some("battery_level".to_string()),
            uuid: Some(expand_alias(0x2a19)),
        };
        let forms = record.identifiers();
        assert_eq!(forms.len(), 3);
        assert_eq!(forms[0], Identifier::Alias(0x2a19));
        assert_eq!(
            forms[2],
            Identifier::Uuid("00002a19-0000-1000-8000-00805f9b34fb".to_string())
        );
        assert_eq!(
            record.to_string(),
            "characteristic battery_level (00002a19-0000-1000-8000-00805f9b34fb)"
        );
    }
}
