//! # Fixture Tool
//!
//! ## Purpose
//!
//! Command-line access to the identifier registry and the conformance
//! catalog, configured through `fixture-config`:
//! - Resolve any identifier form to its canonical record
//! - Expand aliases and check UUID syntax
//! - Dump a category's scenarios with their expected outcomes
//! - Validate every catalog and write the report
//! - Judge harness observations against the oracle
//!
//! ## Architecture Role
//!
//! ```text
//! config/fixtures.toml ─→ [FixtureContext] ─→ commands ─→ stdout / report file
//!        GATTFIX_*            registry             text or JSON
//!                             blocklist
//!                             limits
//! ```
//!
//! Every command renders to a `String` so the binary stays a thin shell
//! around this library.

pub mod commands;
pub mod context;

pub use commands::{
    catalog_command, check_uuid_command, expand_command, judge_command, list_command,
    parse_alias, parse_identifier, parse_outcome, resolve_command, validate_command, Listing,
    ValidateOutput,
};
pub use context::FixtureContext;
