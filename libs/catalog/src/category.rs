//! Test categories, one per GATT operation under test

use crate::error::CatalogError;
use gatt_types::{AttributeKind, GattOperation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A family of scenarios exercising the same GATT operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestCategory {
    CharacteristicReadValue,
    CharacteristicWriteValue,
    GetCharacteristic,
    GetCharacteristics,
    DescriptorReadValue,
    DescriptorWriteValue,
}

impl TestCategory {
    pub const ALL: [TestCategory; 6] = [
        TestCategory::CharacteristicReadValue,
        TestCategory::CharacteristicWriteValue,
        TestCategory::GetCharacteristic,
        TestCategory::GetCharacteristics,
        TestCategory::DescriptorReadValue,
        TestCategory::DescriptorWriteValue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestCategory::CharacteristicReadValue => "characteristicReadValue",
            TestCategory::CharacteristicWriteValue => "characteristicWriteValue",
            TestCategory::GetCharacteristic => "getCharacteristic",
            TestCategory::GetCharacteristics => "getCharacteristics",
            TestCategory::DescriptorReadValue => "descriptorReadValue",
            TestCategory::DescriptorWriteValue => "descriptorWriteValue",
        }
    }

    /// Kind of entity the scenario's target identifier names
    pub fn target_kind(&self) -> AttributeKind {
        match self {
            TestCategory::DescriptorReadValue | TestCategory::DescriptorWriteValue => {
                AttributeKind::Descriptor
            }
            _ => AttributeKind::Characteristic,
        }
    }

    /// Operation applied to the target
    pub fn operation(&self) -> GattOperation {
        match self {
            TestCategory::CharacteristicReadValue | TestCategory::DescriptorReadValue => {
                GattOperation::Read
            }
            TestCategory::CharacteristicWriteValue | TestCategory::DescriptorWriteValue => {
                GattOperation::Write
            }
            TestCategory::GetCharacteristic | TestCategory::GetCharacteristics => {
                GattOperation::Discover
            }
        }
    }

    /// Whether every scenario must name a target
    ///
    /// `getCharacteristics` may omit it to enumerate the whole service.
    pub fn requires_target(&self) -> bool {
        !matches!(self, TestCategory::GetCharacteristics)
    }

    /// Whether every scenario carries a payload
    pub fn requires_value(&self) -> bool {
        self.operation() == GattOperation::Write
    }

    /// Whether every scenario carries a companion service and request options
    pub fn requires_service(&self) -> bool {
        self.operation() == GattOperation::Discover
    }
}

impl fmt::Display for TestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CatalogError::unknown_category(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_round_trip() {
        for category in TestCategory::ALL {
            assert_eq!(category.as_str().parse::<TestCategory>(), Ok(category));
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_unknown_category_lists_valid_names() {
        let error = "readValue".parse::<TestCategory>().unwrap_err();
        let message = error.to_string();
        assert!(message.contains("readValue"));
        assert!(message.contains("descriptorWriteValue"));
        // Names are case-sensitive
        assert!("CharacteristicReadValue".parse::<TestCategory>().is_err());
    }

    #[test]
    fn test_category_targets() {
        assert_eq!(
            TestCategory::DescriptorWriteValue.target_kind(),
            AttributeKind::Descriptor
        );
        assert_eq!(
            TestCategory::GetCharacteristic.operation(),
            GattOperation::Discover
        );
        assert!(!TestCategory::GetCharacteristics.requires_target());
        assert!(TestCategory::CharacteristicWriteValue.requires_value());
    }
}
