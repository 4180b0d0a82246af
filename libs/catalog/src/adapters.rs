//! Mock adapter data sets and the device names they advertise

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fake adapter configurations the browser's test backend can load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdapterDataSet {
    #[serde(rename = "NotPresentAdapter")]
    NotPresent,
    #[serde(rename = "NotPoweredAdapter")]
    NotPowered,
    #[serde(rename = "EmptyAdapter")]
    Empty,
    #[serde(rename = "HeartRateAdapter")]
    HeartRate,
    #[serde(rename = "TwoHeartRateServicesAdapter")]
    TwoHeartRateServices,
    #[serde(rename = "EmptyNameHeartRateAdapter")]
    EmptyNameHeartRate,
    #[serde(rename = "NoNameHeartRateAdapter")]
    NoNameHeartRate,
    #[serde(rename = "GlucoseHeartRateAdapter")]
    GlucoseHeartRate,
    #[serde(rename = "UnicodeDeviceAdapter")]
    UnicodeDevice,
    #[serde(rename = "BlacklistTestAdapter")]
    BlocklistTest,
    #[serde(rename = "MissingCharacteristicHeartRateAdapter")]
    MissingCharacteristicHeartRate,
    #[serde(rename = "MissingServiceHeartRateAdapter")]
    MissingServiceHeartRate,
    #[serde(rename = "MissingDescriptorHeartRateAdapter")]
    MissingDescriptorHeartRate,
}

impl AdapterDataSet {
    pub const ALL: [AdapterDataSet; 13] = [
        AdapterDataSet::NotPresent,
        AdapterDataSet::NotPowered,
        AdapterDataSet::Empty,
        AdapterDataSet::HeartRate,
        AdapterDataSet::TwoHeartRateServices,
        AdapterDataSet::EmptyNameHeartRate,
        AdapterDataSet::NoNameHeartRate,
        AdapterDataSet::GlucoseHeartRate,
        AdapterDataSet::UnicodeDevice,
        AdapterDataSet::BlocklistTest,
        AdapterDataSet::MissingCharacteristicHeartRate,
        AdapterDataSet::MissingServiceHeartRate,
        AdapterDataSet::MissingDescriptorHeartRate,
    ];

    /// Name the test backend expects
    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterDataSet::NotPresent => "NotPresentAdapter",
            AdapterDataSet::NotPowered => "NotPoweredAdapter",
            AdapterDataSet::Empty => "EmptyAdapter",
            AdapterDataSet::HeartRate => "HeartRateAdapter",
            AdapterDataSet::TwoHeartRateServices => "TwoHeartRateServicesAdapter",
            AdapterDataSet::EmptyNameHeartRate => "EmptyNameHeartRateAdapter",
            AdapterDataSet::NoNameHeartRate => "NoNameHeartRateAdapter",
            AdapterDataSet::GlucoseHeartRate => "GlucoseHeartRateAdapter",
            AdapterDataSet::UnicodeDevice => "UnicodeDeviceAdapter",
            AdapterDataSet::BlocklistTest => "BlacklistTestAdapter",
            AdapterDataSet::MissingCharacteristicHeartRate => {
                "MissingCharacteristicHeartRateAdapter"
            }
            AdapterDataSet::MissingServiceHeartRate => "MissingServiceHeartRateAdapter",
            AdapterDataSet::MissingDescriptorHeartRate => "MissingDescriptorHeartRateAdapter",
        }
    }

    /// Whether a `requestDevice` call can find anything on this adapter
    pub fn has_devices(&self) -> bool {
        !matches!(
            self,
            AdapterDataSet::NotPresent | AdapterDataSet::NotPowered | AdapterDataSet::Empty
        )
    }
}

impl fmt::Display for AdapterDataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdapterDataSet {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdapterDataSet::ALL
            .into_iter()
            .find(|adapter| adapter.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownAdapter {
                name: s.to_string(),
            })
    }
}

/// Names advertised by the mock devices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MockDeviceName {
    #[serde(rename = "Heart Rate Device")]
    HeartRate,
    #[serde(rename = "Glucose Device")]
    Glucose,
}

impl MockDeviceName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MockDeviceName::HeartRate => "Heart Rate Device",
            MockDeviceName::Glucose => "Glucose Device",
        }
    }
}

impl fmt::Display for MockDeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device name no mock device advertises
pub const WRONG_NAME: &str = "wrong_name";
/// Service name missing from every registry
pub const WRONG_SERVICE: &str = "wrong_service";
