//! # Identifier Registry - Representation-Agnostic GATT Lookup
//!
//! ## Purpose
//!
//! Holds one [`IdentifierRecord`] per known GATT entity and answers the
//! question every conformance scenario starts with: which entity does this
//! alias, name or UUID refer to, or why does it refer to none?
//!
//! ## Integration Points
//!
//! - **Catalog oracle**: resolves each scenario's target before deriving the
//!   expected outcome
//! - **Fixture tool**: `resolve` and `validate` subcommands
//! - **Configuration**: extra records from `[[registry.extra]]` are offered
//!   to a [`RegistryBuilder`] seeded with the standard tables
//!
//! ## Architecture Role
//!
//! ```text
//! assigned_numbers tables ──┐
//! test fixture entities ────┼─→ [RegistryBuilder] ─→ IdentifierRegistry
//! configured extras ────────┘        ↓ rejects            ↓
//!                              empty / mismatched /   resolve(identifier)
//!                              duplicate records      resolve_kind(kind, identifier)
//! ```
//!
//! Names are unique per [`AttributeKind`]; `current_time` is both a service
//! and a characteristic. A kind-less name lookup prefers services, then
//! characteristics, then descriptors. UUIDs are unique across all kinds.

pub mod blocklist;

pub use blocklist::{Blocklist, Exclusion, GattOperation, STANDARD_BLOCKLIST};

use crate::common::errors::{FormatViolation, RegistryError, ResolveError};
use crate::identifiers::assigned_numbers::{self, TEST_FIXTURES};
use crate::identifiers::{expand_alias, AttributeKind, CanonicalUuid, Identifier, IdentifierRecord};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error};

/// Registry built from the assigned-number tables and the test fixtures
pub static STANDARD_REGISTRY: Lazy<IdentifierRegistry> = Lazy::new(|| {
    let registry = RegistryBuilder::with_standard().build();
    debug!(records = registry.len(), "Built standard GATT identifier registry");
    registry
});

/// Unvalidated description of a record, as read from tables or configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSpec {
    pub kind: AttributeKind,
    pub alias: Option<u32>,
    pub name: Option<String>,
    pub uuid: Option<String>,
}

impl RecordSpec {
    pub fn new(kind: AttributeKind) -> Self {
        Self {
            kind,
            alias: None,
            name: None,
            uuid: None,
        }
    }

    pub fn alias(mut self, alias: u32) -> Self {
        self.alias = Some(alias);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    /// Check consistency and produce the canonical record
    pub fn into_record(self) -> Result<IdentifierRecord, RegistryError> {
        let kind = self.kind;
        if self.alias.is_none() && self.name.is_none() && self.uuid.is_none() {
            return Err(RegistryError::EmptyRecord { kind });
        }

        let declared = match self.uuid {
            Some(input) => Some(CanonicalUuid::parse(&input).map_err(|violation| {
                RegistryError::InvalidUuid { input, violation }
            })?),
            None => None,
        };

        let uuid = match (self.alias, declared) {
            (Some(alias), Some(declared)) => {
                let expected = expand_alias(alias);
                if expected != declared {
                    return Err(RegistryError::AliasMismatch {
                        alias,
                        expected,
                        declared,
                    });
                }
                Some(declared)
            }
            (Some(alias), None) => Some(expand_alias(alias)),
            (None, declared) => declared,
        };

        Ok(IdentifierRecord {
            kind,
            alias: self.alias,
            name: self.name,
            uuid,
        })
    }
}

/// Incrementally assembles an [`IdentifierRegistry`], rejecting bad records
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    records: Vec<IdentifierRecord>,
    by_name: HashMap<(AttributeKind, String), usize>,
    by_uuid: HashMap<CanonicalUuid, usize>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded with every assigned number and test fixture entity
    pub fn with_standard() -> Self {
        let mut builder = Self::new();
        for kind in AttributeKind::ALL {
            for entry in assigned_numbers::table(kind) {
                let spec = RecordSpec::new(kind).alias(entry.alias).name(entry.name);
                builder.add_or_log(spec);
            }
        }
        for fixture in TEST_FIXTURES {
            let spec = RecordSpec {
                kind: fixture.kind,
                alias: fixture.alias,
                name: None,
                uuid: fixture.uuid.map(str::to_string),
            };
            builder.add_or_log(spec);
        }
        builder
    }

    fn add_or_log(&mut self, spec: RecordSpec) {
        if let Err(e) = self.add(spec) {
            error!(error = %e, "Skipping inconsistent standard registry entry");
        }
    }

    /// Validate and insert one record
    pub fn add(&mut self, spec: RecordSpec) -> Result<&IdentifierRecord, RegistryError> {
        let record = spec.into_record()?;

        if let Some(name) = &record.name {
            if self.by_name.contains_key(&(record.kind, name.clone())) {
                return Err(RegistryError::DuplicateName { name: name.clone() });
            }
        }
        if let Some(uuid) = record.uuid {
            if self.by_uuid.contains_key(&uuid) {
                return Err(RegistryError::DuplicateUuid { uuid });
            }
        }

        let index = self.records.len();
        if let Some(name) = &record.name {
            self.by_name.insert((record.kind, name.clone()), index);
        }
        if let Some(uuid) = record.uuid {
            self.by_uuid.insert(uuid, index);
        }
        self.records.push(record);
        Ok(&self.records[index])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn build(self) -> IdentifierRegistry {
        IdentifierRegistry {
            records: self.records,
            by_name: self.by_name,
            by_uuid: self.by_uuid,
        }
    }
}

/// Immutable set of canonical GATT identifier records
#[derive(Debug, Clone)]
pub struct IdentifierRegistry {
    records: Vec<IdentifierRecord>,
    by_name: HashMap<(AttributeKind, String), usize>,
    by_uuid: HashMap<CanonicalUuid, usize>,
}

impl IdentifierRegistry {
    /// The process-wide standard registry
    pub fn standard() -> &'static IdentifierRegistry {
        &STANDARD_REGISTRY
    }

    /// Resolve any representation to its record
    pub fn resolve(&self, identifier: &Identifier) -> Result<&IdentifierRecord, ResolveError> {
        self.lookup(None, identifier)
    }

    /// Resolve, treating a record of another kind as absent
    pub fn resolve_kind(
        &self,
        kind: AttributeKind,
        identifier: &Identifier,
    ) -> Result<&IdentifierRecord, ResolveError> {
        self.lookup(Some(kind), identifier)
    }

    fn lookup(
        &self,
        kind: Option<AttributeKind>,
        identifier: &Identifier,
    ) -> Result<&IdentifierRecord, ResolveError> {
        let found = match identifier {
            Identifier::Alias(raw) => {
                let alias = u32::try_from(*raw).map_err(|_| {
                    ResolveError::invalid_format(
                        identifier.to_string(),
                        FormatViolation::AliasOutOfRange { value: *raw },
                    )
                })?;
                self.resolve_uuid(&expand_alias(alias))
            }
            Identifier::Name(name) => match kind {
                Some(kind) => self.find_by_name(kind, name),
                None => AttributeKind::ALL
                    .iter()
                    .find_map(|kind| self.find_by_name(*kind, name)),
            },
            Identifier::Uuid(text) => {
                let uuid = CanonicalUuid::parse(text)
                    .map_err(|violation| ResolveError::invalid_format(text.as_str(), violation))?;
                self.resolve_uuid(&uuid)
            }
        };

        found
            .filter(|record| kind.map_or(true, |kind| record.kind == kind))
            .ok_or_else(|| ResolveError::not_found(identifier.to_string()))
    }

    pub fn resolve_uuid(&self, uuid: &CanonicalUuid) -> Option<&IdentifierRecord> {
        self.by_uuid.get(uuid).map(|index| &self.records[*index])
    }

    pub fn find_by_name(&self, kind: AttributeKind, name: &str) -> Option<&IdentifierRecord> {
        self.by_name
            .get(&(kind, name.to_string()))
            .map(|index| &self.records[*index])
    }

    /// Records in insertion order
    pub fn records(&self) -> &[IdentifierRecord] {
        &self.records
    }

    pub fn records_of(&self, kind: AttributeKind) -> impl Iterator<Item = &IdentifierRecord> {
        self.records.iter().filter(move |record| record.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_keeps_every_table_entry() {
        let expected = assigned_numbers::SERVICES.len()
            + assigned_numbers::CHARACTERISTICS.len()
            + assigned_numbers::DESCRIPTORS.len()
            + TEST_FIXTURES.len();
        assert_eq!(IdentifierRegistry::standard().len(), expected);
    }

    #[test]
    fn test_resolve_each_form() {
        let registry = IdentifierRegistry::standard();
        let by_alias = registry.resolve(&Identifier::alias(0x2a19)).unwrap();
        let by_name = registry.resolve(&Identifier::name("battery_level")).unwrap();
        let by_uuid = registry
            .resolve(&Identifier::uuid("00002A19-0000-1000-8000-00805F9B34FB"))
            .unwrap();
        assert_eq!(by_alias, by_name);
        assert_eq!(by_name, by_uuid);
        assert_eq!(by_alias.kind, AttributeKind::Characteristic);
    }

    #[test]
    fn test_shared_name_resolves_per_kind() {
        let registry = IdentifierRegistry::standard();
        let service = registry
            .resolve_kind(AttributeKind::Service, &Identifier::name("current_time"))
            .unwrap();
        assert_eq!(service.alias, Some(0x1805));
        let characteristic = registry
            .resolve_kind(AttributeKind::Characteristic, &Identifier::name("current_time"))
            .unwrap();
        assert_eq!(characteristic.alias, Some(0x2a2b));
        // kind-less lookup prefers the service
        assert_eq!(
            registry.resolve(&Identifier::name("current_time")).unwrap(),
            service
        );
    }

    #[test]
    fn test_resolve_kind_rejects_other_kinds() {
        let registry = IdentifierRegistry::standard();
        let error = registry
            .resolve_kind(AttributeKind::Descriptor, &Identifier::alias(0x2a19))
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_alias_out_of_range_is_invalid_format() {
        let registry = IdentifierRegistry::standard();
        let error = registry
            .resolve(&Identifier::alias(0xfffffffff))
            .unwrap_err();
        assert_eq!(
            error,
            ResolveError::invalid_format(
                "0xfffffffff",
                FormatViolation::AliasOutOfRange { value: 0xfffffffff }
            )
        );
    }

    #[test]
    fn test_builder_rejects_alias_mismatch() {
        let mut builder = RegistryBuilder::new();
        let error = builder
            .add(
                RecordSpec::new(AttributeKind::Characteristic)
                    .alias(0x2a19)
                    .uuid("00002a20-0000-1000-8000-00805f9b34fb"),
            )
            .unwrap_err();
        assert!(matches!(error, RegistryError::AliasMismatch { alias: 0x2a19, .. }));
    }

    #[test]
    fn test_builder_rejects_empty_and_duplicates() {
        let mut builder = RegistryBuilder::new();
        assert_eq!(
            builder.add(RecordSpec::new(AttributeKind::Service)).unwrap_err(),
            RegistryError::EmptyRecord {
                kind: AttributeKind::Service
            }
        );

        builder
            .add(RecordSpec::new(AttributeKind::Service).alias(0xfff0).name("vendor"))
            .unwrap();
        assert!(matches!(
            builder.add(RecordSpec::new(AttributeKind::Service).name("vendor")),
            Err(RegistryError::DuplicateName { .. })
        ));
        assert!(matches!(
            builder.add(
                RecordSpec::new(AttributeKind::Service).uuid("0000fff0-0000-1000-8000-00805f9b34fb")
            ),
            Err(RegistryError::DuplicateUuid { .. })
        ));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_name_only_record_has_no_uuid() {
        let mut builder = RegistryBuilder::new();
        let record = builder
            .add(RecordSpec::new(AttributeKind::Descriptor).name("vendor_descriptor"))
            .unwrap();
        assert_eq!(record.uuid, None);
        let registry = builder.build();
        assert!(registry
            .resolve(&Identifier::name("vendor_descriptor"))
            .is_ok());
    }
}
