//! # GATT Identifier Registry
//!
//! Canonical identifiers for Bluetooth GATT services, characteristics and
//! descriptors, as consumed by Web Bluetooth conformance fixtures.
//!
//! ## Design Philosophy
//!
//! - **One Entity, Three Spellings**: alias, name and UUID resolve to the same record
//! - **Failures Are Values**: malformed and unknown identifiers are test inputs, so
//!   resolution returns [`ResolveError`] instead of panicking
//! - **Canonical Output**: every UUID prints lowercase and hyphenated
//! - **Built Once**: the standard registry and blocklist are immutable statics
//!
//! ## Quick Start
//!
//! ### Resolving Identifiers
//! ```rust
//! use gatt_types::{Identifier, IdentifierRegistry};
//!
//! let registry = IdentifierRegistry::standard();
//! let by_alias = registry.resolve(&Identifier::alias(0x2a19)).unwrap();
//! let by_name = registry.resolve(&Identifier::name("battery_level")).unwrap();
//! assert_eq!(by_alias, by_name);
//!
//! let error = registry.resolve(&Identifier::uuid("11")).unwrap_err();
//! assert!(error.is_invalid_format());
//! ```
//!
//! ### Alias Expansion
//! ```rust
//! use gatt_types::{expand_alias, is_valid_uuid};
//!
//! let uuid = expand_alias(0x180d);
//! assert_eq!(uuid.to_string(), "0000180d-0000-1000-8000-00805f9b34fb");
//! assert!(is_valid_uuid("0000180D-0000-1000-8000-00805F9B34FB"));
//! ```
//!
//! ## Integration Points
//!
//! - **gatt-catalog**: resolves scenario targets and consults the blocklist
//! - **fixture-tool**: CLI resolution and catalog validation
//! - **fixture-config**: supplies extra records and blocklist entries that the
//!   tool layers over the standard tables via [`RegistryBuilder`] and [`Blocklist::insert`]

pub mod common;
pub mod identifiers;
pub mod registry;

// Re-export error types
pub use common::errors::{FormatViolation, RegistryError, ResolveError};

// Re-export identifier types
pub use identifiers::{
    check_uuid_syntax, expand_alias, expand_alias_wrapping, is_valid_uuid, AttributeKind,
    CanonicalUuid, Identifier, IdentifierRecord, BLUETOOTH_BASE_UUID, UUID_STRING_LEN,
};

// Re-export registry types
pub use registry::{
    Blocklist, Exclusion, GattOperation, IdentifierRegistry, RecordSpec, RegistryBuilder,
    STANDARD_BLOCKLIST, STANDARD_REGISTRY,
};
