//! GATT blocklist: UUIDs a browser must refuse to expose
//!
//! An [`Exclusion::Exclude`] entry hides the entity entirely. The narrower
//! `ExcludeReads` and `ExcludeWrites` entries leave it discoverable but reject
//! the named operation.

use crate::identifiers::assigned_numbers::{
    BLOCKLIST_EXCLUDE_READS_CHARACTERISTIC_UUID, BLOCKLIST_EXCLUDE_READS_DESCRIPTOR_UUID,
    BLOCKLIST_TEST_SERVICE_UUID, FIRMWARE_UPDATE_SERVICE_UUID, OVER_THE_AIR_DOWNLOAD_SERVICE_UUID,
};
use crate::identifiers::CanonicalUuid;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};

/// How much of an entity the blocklist hides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exclusion {
    Exclude,
    ExcludeReads,
    ExcludeWrites,
}

impl Exclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exclusion::Exclude => "exclude",
            Exclusion::ExcludeReads => "exclude-reads",
            Exclusion::ExcludeWrites => "exclude-writes",
        }
    }

    pub fn blocks(&self, operation: GattOperation) -> bool {
        matches!(
            (self, operation),
            (Exclusion::Exclude, _)
                | (Exclusion::ExcludeReads, GattOperation::Read)
                | (Exclusion::ExcludeWrites, GattOperation::Write)
        )
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exclusion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "exclude" => Ok(Exclusion::Exclude),
            "exclude-reads" => Ok(Exclusion::ExcludeReads),
            "exclude-writes" => Ok(Exclusion::ExcludeWrites),
            other => Err(format!(
                "unknown exclusion '{}': expected exclude, exclude-reads or exclude-writes",
                other
            )),
        }
    }
}

/// Operation a scenario performs on its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GattOperation {
    Discover,
    Read,
    Write,
}

impl fmt::Display for GattOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GattOperation::Discover => "discover",
            GattOperation::Read => "read",
            GattOperation::Write => "write",
        };
        f.write_str(name)
    }
}

const STANDARD_ENTRIES: &[(&str, Exclusion)] = &[
    // human_interface_device
    ("00001812-0000-1000-8000-00805f9b34fb", Exclusion::Exclude),
    (FIRMWARE_UPDATE_SERVICE_UUID, Exclusion::Exclude),
    (OVER_THE_AIR_DOWNLOAD_SERVICE_UUID, Exclusion::Exclude),
    // FIDO
    ("0000fffd-0000-1000-8000-00805f9b34fb", Exclusion::Exclude),
    // gap.reconnection_address, serial_number_string
    ("00002a03-0000-1000-8000-00805f9b34fb", Exclusion::Exclude),
    ("00002a25-0000-1000-8000-00805f9b34fb", Exclusion::Exclude),
    (BLOCKLIST_TEST_SERVICE_UUID, Exclusion::Exclude),
    // gap.peripheral_privacy_flag
    ("00002a02-0000-1000-8000-00805f9b34fb", Exclusion::ExcludeWrites),
    // client and server characteristic configuration
    ("00002902-0000-1000-8000-00805f9b34fb", Exclusion::ExcludeWrites),
    ("00002903-0000-1000-8000-00805f9b34fb", Exclusion::ExcludeWrites),
    (BLOCKLIST_EXCLUDE_READS_CHARACTERISTIC_UUID, Exclusion::ExcludeReads),
    (BLOCKLIST_EXCLUDE_READS_DESCRIPTOR_UUID, Exclusion::ExcludeReads),
];

/// Standard blocklist plus the conformance test entries
pub static STANDARD_BLOCKLIST: Lazy<Blocklist> = Lazy::new(|| {
    let mut blocklist = Blocklist::new();
    for (text, exclusion) in STANDARD_ENTRIES {
        match CanonicalUuid::parse(text) {
            Ok(uuid) => {
                blocklist.insert(uuid, *exclusion);
            }
            Err(violation) => {
                error!(uuid = %text, %violation, "Skipping malformed standard blocklist entry")
            }
        }
    }
    debug!(entries = blocklist.len(), "Built standard GATT blocklist");
    blocklist
});

/// UUID to exclusion map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    entries: BTreeMap<CanonicalUuid, Exclusion>,
}

impl Blocklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> &'static Blocklist {
        &STANDARD_BLOCKLIST
    }

    /// Insert or replace an entry, returning the previous exclusion
    pub fn insert(&mut self, uuid: CanonicalUuid, exclusion: Exclusion) -> Option<Exclusion> {
        self.entries.insert(uuid, exclusion)
    }

    pub fn exclusion(&self, uuid: &CanonicalUuid) -> Option<Exclusion> {
        self.entries.get(uuid).copied()
    }

    pub fn is_blocked(&self, uuid: &CanonicalUuid, operation: GattOperation) -> bool {
        self.exclusion(uuid)
            .map_or(false, |exclusion| exclusion.blocks(operation))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalUuid, &Exclusion)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::expand_alias;

    #[test]
    fn test_standard_blocklist_is_complete() {
        assert_eq!(Blocklist::standard().len(), STANDARD_ENTRIES.len());
    }

    #[test]
    fn test_exclusion_scopes() {
        let blocklist = Blocklist::standard();
        let serial_number = expand_alias(0x2a25);
        assert!(blocklist.is_blocked(&serial_number, GattOperation::Discover));
        assert!(blocklist.is_blocked(&serial_number, GattOperation::Read));

        let cccd = expand_alias(0x2902);
        assert!(!blocklist.is_blocked(&cccd, GattOperation::Discover));
        assert!(!blocklist.is_blocked(&cccd, GattOperation::Read));
        assert!(blocklist.is_blocked(&cccd, GattOperation::Write));

        let exclude_reads = CanonicalUuid::parse(BLOCKLIST_EXCLUDE_READS_CHARACTERISTIC_UUID).unwrap();
        assert!(blocklist.is_blocked(&exclude_reads, GattOperation::Read));
        assert!(!blocklist.is_blocked(&exclude_reads, GattOperation::Write));

        assert!(!blocklist.is_blocked(&expand_alias(0x2a19), GattOperation::Read));
    }

    #[test]
    fn test_exclusion_parsing() {
        assert_eq!("exclude".parse::<Exclusion>(), Ok(Exclusion::Exclude));
        assert_eq!("EXCLUDE_READS".parse::<Exclusion>(), Ok(Exclusion::ExcludeReads));
        assert_eq!("exclude-writes".parse::<Exclusion>(), Ok(Exclusion::ExcludeWrites));
        assert!("allow".parse::<Exclusion>().is_err());
    }

    #[test]
    fn test_insert_replaces_entry() {
        let mut blocklist = Blocklist::new();
        let uuid = expand_alias(0xfff1);
        assert_eq!(blocklist.insert(uuid, Exclusion::ExcludeReads), None);
        assert_eq!(
            blocklist.insert(uuid, Exclusion::Exclude),
            Some(Exclusion::ExcludeReads)
        );
        assert_eq!(blocklist.exclusion(&uuid), Some(Exclusion::Exclude));
    }
}
