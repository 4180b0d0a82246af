//! # GATT Conformance Catalog
//!
//! ## Purpose
//!
//! Ordered Web Bluetooth conformance scenarios, one table per GATT operation,
//! plus the oracle that derives what a conforming browser must do with each:
//! - Scenario tables with stable 1-based ordinals ("Test N")
//! - Outcome oracle over the identifier registry, blocklist and limits
//! - Catalog validation and per-category outcome statistics
//! - Outcome log comparing harness observations with the oracle
//! - Identifier fixtures and mock adapter data-set names
//!
//! ## Integration Points
//!
//! - **Identifier Registry**: every target and companion service is resolved
//!   through `gatt_types::IdentifierRegistry`
//! - **Fixture Tool**: dumps catalogs as text or JSON and runs validation
//! - **External Harness**: drives the mock adapter per scenario and feeds the
//!   observed outcome back through [`OutcomeLog::record`]
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [catalog] → services/fixture_tool
//!     ↑            ↓                ↓
//! Registry    Scenario tables    CLI / JSON
//! Blocklist   Oracle             Validation report
//! UUIDs       Outcome log        Harness verdicts
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Any Bluetooth stack or adapter emulation
//! - Browser automation or page rendering

pub mod adapters;
pub mod bytes;
pub mod case;
pub mod category;
pub mod error;
pub mod fixtures;
pub mod oracle;
pub mod outcome_log;
pub mod report;
pub mod tables;

pub use adapters::{AdapterDataSet, MockDeviceName, WRONG_NAME, WRONG_SERVICE};
pub use bytes::{ascii_to_bytes, zeroed_payload};
pub use case::{DisconnectExpectation, RequestOptions, ScanFilter, TestCase};
pub use category::TestCategory;
pub use error::CatalogError;
pub use oracle::{expected_outcome, Limits, Oracle, Outcome, RejectReason, MAX_ATTRIBUTE_VALUE_LENGTH};
pub use outcome_log::{CaseResult, LogEntry, LogSummary, OutcomeLog, Verdict};
pub use report::{annotate, validate_catalog, AnnotatedCase, CatalogReport, CategorySummary, Violation};
pub use tables::{all_catalogs, catalog};
