//! Catalog-level errors
//!
//! Lookup failures for category and adapter names coming from the command
//! line or configuration, and out-of-range ordinals reported by a harness.

use crate::category::TestCategory;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Category name is not one of the six camelCase catalog names
    #[error("Unknown test category '{name}': expected one of {expected}")]
    UnknownCategory { name: String, expected: String },

    /// Adapter data-set name is not recognized by the mock adapter
    #[error("Unknown adapter data set '{name}'")]
    UnknownAdapter { name: String },

    /// Harness reported a result for a test that does not exist
    #[error("{category} has {len} tests, no Test {ordinal}")]
    OrdinalOutOfRange {
        category: TestCategory,
        ordinal: usize,
        len: usize,
    },

    /// Report could not be serialized
    #[error("Failed to serialize catalog report: {0}")]
    Serialization(String),
}

impl CatalogError {
    pub fn unknown_category(name: impl Into<String>) -> Self {
        let expected = TestCategory::ALL
            .iter()
            .map(|category| category.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownCategory {
            name: name.into(),
            expected,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
