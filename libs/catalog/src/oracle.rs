//! # Outcome Oracle - Expected Result of Each Scenario
//!
//! ## Purpose
//!
//! Derives what a conforming browser must do with a scenario from three
//! inputs: the identifier registry, the blocklist and the attribute limits.
//! The harness compares this against what it observed on the mock adapter.
//!
//! ## Precedence
//!
//! ```text
//! mustDisconnect: true ──────────────────────────→ Disconnect
//! service / target malformed ────────────────────→ Rejected(InvalidIdentifier)
//! service / target not registered for its kind ──→ Rejected(NotFound)
//! service or target blocklisted for the operation → Rejected(Blocklisted)
//! payload longer than the attribute limit ───────→ Rejected(PayloadTooLarge)
//! otherwise ─────────────────────────────────────→ Success
//! ```
//!
//! Characteristic properties (read/write permissions) are not modelled, so a
//! read of a write-only control point is still `Success` here.

use crate::case::{DisconnectExpectation, TestCase};
use gatt_types::{
    AttributeKind, Blocklist, GattOperation, Identifier, IdentifierRecord, IdentifierRegistry,
    ResolveError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a GATT attribute value in bytes
pub const MAX_ATTRIBUTE_VALUE_LENGTH: usize = 512;

/// Tunable limits applied by the oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_attribute_value_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_attribute_value_length: MAX_ATTRIBUTE_VALUE_LENGTH,
        }
    }
}

impl Limits {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attribute_value_length == 0 {
            return Err("max_attribute_value_length must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Why a conforming browser refuses the operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    InvalidIdentifier,
    NotFound,
    Blocklisted,
    PayloadTooLarge,
}

impl RejectReason {
    pub const ALL: [RejectReason; 4] = [
        RejectReason::InvalidIdentifier,
        RejectReason::NotFound,
        RejectReason::Blocklisted,
        RejectReason::PayloadTooLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::InvalidIdentifier => "invalid-identifier",
            RejectReason::NotFound => "not-found",
            RejectReason::Blocklisted => "blocklisted",
            RejectReason::PayloadTooLarge => "payload-too-large",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ResolveError> for RejectReason {
    fn from(error: &ResolveError) -> Self {
        match error {
            ResolveError::InvalidFormat { .. } => RejectReason::InvalidIdentifier,
            ResolveError::NotFound { .. } => RejectReason::NotFound,
        }
    }
}

/// Result of running one scenario, expected or observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "kebab-case")]
pub enum Outcome {
    Disconnect,
    Rejected(RejectReason),
    Success,
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Disconnect => f.write_str("disconnect"),
            Outcome::Rejected(reason) => write!(f, "rejected ({})", reason),
            Outcome::Success => f.write_str("success"),
        }
    }
}

/// Registry, blocklist and limits bundled for repeated evaluation
#[derive(Debug, Clone, Copy)]
pub struct Oracle<'a> {
    pub registry: &'a IdentifierRegistry,
    pub blocklist: &'a Blocklist,
    pub limits: Limits,
}

impl Oracle<'static> {
    /// Oracle over the standard registry and blocklist with default limits
    pub fn standard() -> Self {
        Self {
            registry: IdentifierRegistry::standard(),
            blocklist: Blocklist::standard(),
            limits: Limits::default(),
        }
    }
}

impl<'a> Oracle<'a> {
    pub fn new(registry: &'a IdentifierRegistry, blocklist: &'a Blocklist, limits: Limits) -> Self {
        Self {
            registry,
            blocklist,
            limits,
        }
    }

    pub fn expected_outcome(&self, case: &TestCase) -> Outcome {
        expected_outcome(case, self.registry, self.blocklist, self.limits)
    }
}

/// Derive the outcome a conforming browser produces for `case`
pub fn expected_outcome(
    case: &TestCase,
    registry: &IdentifierRegistry,
    blocklist: &Blocklist,
    limits: Limits,
) -> Outcome {
    if case.disconnect == DisconnectExpectation::Expected {
        return Outcome::Disconnect;
    }

    let service = match resolve(registry, AttributeKind::Service, case.service.as_ref()) {
        Ok(service) => service,
        Err(reason) => return Outcome::Rejected(reason),
    };
    let target = match resolve(registry, case.category.target_kind(), case.target.as_ref()) {
        Ok(target) => target,
        Err(reason) => return Outcome::Rejected(reason),
    };

    if is_blocked(blocklist, service, GattOperation::Discover)
        || is_blocked(blocklist, target, case.category.operation())
    {
        return Outcome::Rejected(RejectReason::Blocklisted);
    }

    if case
        .value_len()
        .map_or(false, |len| len > limits.max_attribute_value_length)
    {
        return Outcome::Rejected(RejectReason::PayloadTooLarge);
    }

    Outcome::Success
}

fn resolve<'r>(
    registry: &'r IdentifierRegistry,
    kind: AttributeKind,
    identifier: Option<&Identifier>,
) -> Result<Option<&'r IdentifierRecord>, RejectReason> {
    match identifier {
        Some(identifier) => registry
            .resolve_kind(kind, identifier)
            .map(Some)
            .map_err(|e| RejectReason::from(&e)),
        None => Ok(None),
    }
}

fn is_blocked(
    blocklist: &Blocklist,
    record: Option<&IdentifierRecord>,
    operation: GattOperation,
) -> bool {
    record
        .and_then(|record| record.uuid)
        .map_or(false, |uuid| blocklist.is_blocked(&uuid, operation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::TestCategory;
    use crate::tables::catalog;

    fn outcomes(category: TestCategory) -> Vec<Outcome> {
        let oracle = Oracle::standard();
        catalog(category)
            .iter()
            .map(|case| oracle.expected_outcome(case))
            .collect()
    }

    #[test]
    fn test_characteristic_read_outcomes() {
        use Outcome::*;
        use RejectReason::*;
        assert_eq!(
            outcomes(TestCategory::CharacteristicReadValue),
            vec![
                Disconnect,
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Success,
                Success,
                Success,
                Success,
            ]
        );
    }

    #[test]
    fn test_characteristic_write_outcomes() {
        use Outcome::*;
        use RejectReason::*;
        assert_eq!(
            outcomes(TestCategory::CharacteristicWriteValue),
            vec![
                Disconnect,
                Rejected(PayloadTooLarge),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Success,
                Success,
            ]
        );
    }

    #[test]
    fn test_get_characteristic_outcomes() {
        use Outcome::*;
        use RejectReason::*;
        assert_eq!(
            outcomes(TestCategory::GetCharacteristic),
            vec![
                Rejected(NotFound),
                Success,
                Rejected(InvalidIdentifier),
                Rejected(InvalidIdentifier),
                Rejected(NotFound),
                Rejected(NotFound),
                Rejected(NotFound),
                Rejected(NotFound),
                Success,
                Rejected(NotFound),
                Success,
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
            ]
        );
    }

    #[test]
    fn test_descriptor_outcomes() {
        use Outcome::*;
        use RejectReason::*;
        assert_eq!(
            outcomes(TestCategory::DescriptorReadValue),
            vec![Disconnect, Disconnect, Disconnect, Success, Success, Success]
        );
        assert_eq!(
            outcomes(TestCategory::DescriptorWriteValue),
            vec![
                Disconnect,
                Rejected(PayloadTooLarge),
                Rejected(Blocklisted),
                Rejected(Blocklisted),
                Success,
                Success,
            ]
        );
    }

    #[test]
    fn test_limits_change_payload_verdict() {
        let case = &catalog(TestCategory::CharacteristicWriteValue)[1];
        let registry = IdentifierRegistry::standard();
        let blocklist = Blocklist::standard();
        let relaxed = Limits {
            max_attribute_value_length: 1024,
        };
        assert_eq!(
            expected_outcome(case, registry, blocklist, relaxed),
            Outcome::Success
        );
        assert_eq!(
            expected_outcome(case, registry, blocklist, Limits::default()),
            Outcome::Rejected(RejectReason::PayloadTooLarge)
        );
    }

    #[test]
    fn test_empty_blocklist_allows_everything_registered() {
        let empty = Blocklist::new();
        let oracle = Oracle::new(IdentifierRegistry::standard(), &empty, Limits::default());
        let case = &catalog(TestCategory::CharacteristicReadValue)[1];
        assert_eq!(oracle.expected_outcome(case), Outcome::Success);
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&Outcome::Rejected(RejectReason::NotFound)).unwrap();
        assert_eq!(json, r#"{"outcome":"rejected","reason":"not-found"}"#);
        let json = serde_json::to_string(&Outcome::Success).unwrap();
        assert_eq!(json, r#"{"outcome":"success"}"#);
    }

    #[test]
    fn test_limits_validation() {
        assert!(Limits::default().validate().is_ok());
        assert!(Limits {
            max_attribute_value_length: 0
        }
        .validate()
        .is_err());
    }
}
