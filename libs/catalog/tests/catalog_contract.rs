//! Catalog Contract Tests
//!
//! The guarantees a harness relies on when it reports results by ordinal:
//! - Declaration order and the first scenario of each table never change
//! - Oversized writes are always rejected
//! - Every target is either resolvable or a deliberate negative case

use gatt_catalog::{
    all_catalogs, catalog, expected_outcome, DisconnectExpectation, Limits, Oracle, Outcome,
    RejectReason, TestCase, TestCategory, MAX_ATTRIBUTE_VALUE_LENGTH,
};
use gatt_types::{Blocklist, Identifier, IdentifierRegistry};
use proptest::prelude::*;

#[test]
fn test_first_characteristic_read_is_body_sensor_location() {
    for _ in 0..3 {
        let first = &catalog(TestCategory::CharacteristicReadValue)[0];
        assert_eq!(first.target, Some(Identifier::name("body_sensor_location")));
        assert!(first.disconnect.is_expected());
    }
}

#[test]
fn test_oversized_writes_are_rejected() {
    let oracle = Oracle::standard();
    let mut oversized = 0;
    for (_, cases) in all_catalogs() {
        for case in cases {
            if case.value_len().map_or(false, |len| len > MAX_ATTRIBUTE_VALUE_LENGTH) {
                oversized += 1;
                assert_eq!(
                    oracle.expected_outcome(case),
                    Outcome::Rejected(RejectReason::PayloadTooLarge),
                    "{}",
                    case
                );
            }
        }
    }
    assert_eq!(oversized, 2);
}

#[test]
fn test_negative_targets_are_deliberate() {
    let registry = IdentifierRegistry::standard();
    let oracle = Oracle::standard();
    for (category, cases) in all_catalogs() {
        for case in cases {
            let Some(target) = &case.target else { continue };
            match registry.resolve_kind(category.target_kind(), target) {
                Ok(_) => {}
                Err(e) => assert_eq!(
                    oracle.expected_outcome(case),
                    Outcome::Rejected(RejectReason::from(&e)),
                    "{} {}",
                    category,
                    case
                ),
            }
        }
    }
}

#[test]
fn test_alias_name_and_uuid_forms_agree() {
    // Tests 2/4, 4/6, 5/7 and 9/10 of characteristicReadValue name the same
    // entity in different forms and must share an expected outcome
    let oracle = Oracle::standard();
    let cases = catalog(TestCategory::CharacteristicReadValue);
    for (a, b) in [(3, 5), (4, 6), (8, 9), (1, 3)] {
        assert_eq!(
            oracle.expected_outcome(&cases[a]),
            oracle.expected_outcome(&cases[b]),
            "{} vs {}",
            cases[a],
            cases[b]
        );
    }
}

#[test]
fn test_catalog_json_lists_every_case() {
    let json = serde_json::to_value(catalog(TestCategory::DescriptorWriteValue)).unwrap();
    let cases = json.as_array().unwrap();
    assert_eq!(cases.len(), 6);
    assert_eq!(cases[0]["target"]["form"], "uuid");
    assert_eq!(cases[0]["target"]["value"], "00003456-0000-1000-8000-00805f9b34fb");
    assert_eq!(cases[1]["value"].as_array().unwrap().len(), 513);
}

fn write_case(len: usize, disconnect: DisconnectExpectation) -> TestCase {
    TestCase {
        ordinal: 1,
        category: TestCategory::CharacteristicWriteValue,
        target: Some(Identifier::alias(0x2345)),
        service: None,
        value: Some(vec![0; len]),
        options: None,
        disconnect,
    }
}

proptest! {
    /// Property: payload length alone decides between success and rejection
    #[test]
    fn payload_limit_is_exact(len in 0usize..2048, limit in 1usize..1024) {
        let case = write_case(len, DisconnectExpectation::NotExpected);
        let limits = Limits { max_attribute_value_length: limit };
        let outcome = expected_outcome(
            &case,
            IdentifierRegistry::standard(),
            Blocklist::standard(),
            limits,
        );
        if len > limit {
            prop_assert_eq!(outcome, Outcome::Rejected(RejectReason::PayloadTooLarge));
        } else {
            prop_assert_eq!(outcome, Outcome::Success);
        }
    }

    /// Property: an expected disconnect takes precedence over everything else
    #[test]
    fn disconnect_takes_precedence(len in 0usize..2048) {
        let case = write_case(len, DisconnectExpectation::Expected);
        prop_assert_eq!(Oracle::standard().expected_outcome(&case), Outcome::Disconnect);
    }
}
