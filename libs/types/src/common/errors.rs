//! Error types for identifier resolution and registry construction
//!
//! Resolution failures are ordinary values: a malformed identifier in a
//! conformance catalog is a test input, so callers receive a [`ResolveError`]
//! they can compare against an expectation instead of a panic.

use crate::identifiers::{AttributeKind, CanonicalUuid};
use thiserror::Error;

/// Why a string or integer is not a syntactically valid identifier
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatViolation {
    /// UUID string is not exactly 36 characters long
    #[error("wrong length: expected {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A hex slot of the 8-4-4-4-12 layout holds a non-hex character
    #[error("non-hex character {character:?} at position {position}")]
    NonHexCharacter { position: usize, character: char },

    /// A hyphen is missing from, or present outside of, positions 8/13/18/23
    #[error("misplaced hyphen at position {position}")]
    MisplacedHyphen { position: usize },

    /// Numeric alias does not fit in 32 bits
    #[error("alias {value:#x} does not fit in 32 bits")]
    AliasOutOfRange { value: u64 },
}

/// Failure to resolve an [`Identifier`](crate::Identifier) to a registered record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Identifier is well-formed but no record matches it
    #[error("no registered GATT entity matches '{identifier}'")]
    NotFound { identifier: String },

    /// Identifier is not a syntactically valid UUID or alias
    #[error("invalid identifier '{input}': {violation}")]
    InvalidFormat {
        input: String,
        violation: FormatViolation,
    },
}

impl ResolveError {
    /// Create a NotFound error for the given identifier text
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    /// Create an InvalidFormat error with the violation found during parsing
    pub fn invalid_format(input: impl Into<String>, violation: FormatViolation) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            violation,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}

/// Inconsistent record offered to a [`RegistryBuilder`](crate::RegistryBuilder)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Record carries none of alias, name or uuid
    #[error("{kind} record has no alias, name or uuid")]
    EmptyRecord { kind: AttributeKind },

    /// Record uuid is not the base-UUID expansion of its alias
    #[error("alias {alias:#06x} expands to {expected}, record declares {declared}")]
    AliasMismatch {
        alias: u32,
        expected: CanonicalUuid,
        declared: CanonicalUuid,
    },

    /// Record uuid string failed syntax validation
    #[error("record uuid '{input}' is invalid: {violation}")]
    InvalidUuid {
        input: String,
        violation: FormatViolation,
    },

    /// Another record already owns this name
    #[error("name '{name}' is already registered")]
    DuplicateName { name: String },

    /// Another record already owns this uuid
    #[error("uuid {uuid} is already registered")]
    DuplicateUuid { uuid: CanonicalUuid },
}
