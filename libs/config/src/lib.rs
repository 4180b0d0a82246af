//! # GATT Fixture Configuration
//!
//! Configuration loading for the fixture tool and any harness embedding the
//! registry and catalog.
//!
//! ## Features
//!
//! - **Limits**: attribute value length used by the outcome oracle
//! - **Registry Extras**: vendor records layered over the standard tables
//! - **Blocklist Extras**: additional excluded UUIDs
//! - **Logging**: level and JSON output for the tracing subscriber
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fixture_config::load_config;
//!
//! let config = load_config(None, Some("ci"))?;
//! println!("limit: {}", config.limits.max_attribute_value_length);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod defaults;
pub mod fixture_config;

// Re-export commonly used types
pub use fixture_config::{
    load_config, BlocklistConfig, ExtraBlocklistEntry, ExtraRecord, FixtureConfig, LimitsConfig,
    LoggingConfig, RegistryConfig, ReportConfig,
};
