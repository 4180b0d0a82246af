//! Scenario tables, one ordered list per category
//!
//! Order is the contract: a harness reports "Test N" by position, so entries
//! are only ever appended.

use crate::bytes::zeroed_payload;
use crate::case::{Case, CaseList, RequestOptions, TestCase};
use crate::category::TestCategory;
use gatt_types::Identifier;
use once_cell::sync::Lazy;
use tracing::debug;

/// Largest payload a GATT attribute value may hold, plus one
const OVERSIZED_WRITE_LEN: usize = 513;

static CHARACTERISTIC_READ_VALUE: Lazy<Vec<TestCase>> =
    Lazy::new(|| built(TestCategory::CharacteristicReadValue, characteristic_read_value));
static CHARACTERISTIC_WRITE_VALUE: Lazy<Vec<TestCase>> =
    Lazy::new(|| built(TestCategory::CharacteristicWriteValue, characteristic_write_value));
static GET_CHARACTERISTIC: Lazy<Vec<TestCase>> =
    Lazy::new(|| built(TestCategory::GetCharacteristic, get_characteristic));
static GET_CHARACTERISTICS: Lazy<Vec<TestCase>> =
    Lazy::new(|| built(TestCategory::GetCharacteristics, get_characteristics));
static DESCRIPTOR_READ_VALUE: Lazy<Vec<TestCase>> =
    Lazy::new(|| built(TestCategory::DescriptorReadValue, descriptor_read_value));
static DESCRIPTOR_WRITE_VALUE: Lazy<Vec<TestCase>> =
    Lazy::new(|| built(TestCategory::DescriptorWriteValue, descriptor_write_value));

/// Scenarios of one category in declaration order
pub fn catalog(category: TestCategory) -> &'static [TestCase] {
    match category {
        TestCategory::CharacteristicReadValue => &CHARACTERISTIC_READ_VALUE,
        TestCategory::CharacteristicWriteValue => &CHARACTERISTIC_WRITE_VALUE,
        TestCategory::GetCharacteristic => &GET_CHARACTERISTIC,
        TestCategory::GetCharacteristics => &GET_CHARACTERISTICS,
        TestCategory::DescriptorReadValue => &DESCRIPTOR_READ_VALUE,
        TestCategory::DescriptorWriteValue => &DESCRIPTOR_WRITE_VALUE,
    }
}

/// Every category paired with its scenarios
pub fn all_catalogs() -> impl Iterator<Item = (TestCategory, &'static [TestCase])> {
    TestCategory::ALL
        .into_iter()
        .map(|category| (category, catalog(category)))
}

fn built(category: TestCategory, fill: fn(&mut CaseList)) -> Vec<TestCase> {
    let mut list = CaseList::new(category);
    fill(&mut list);
    let cases = list.finish();
    debug!(%category, cases = cases.len(), "Built test catalog");
    cases
}

fn alias(value: u64) -> Identifier {
    Identifier::alias(value)
}

fn battery_service_options() -> RequestOptions {
    RequestOptions::filter_services(["battery_service"]).optional_services(["cycling_power"])
}

fn heart_rate_options() -> RequestOptions {
    RequestOptions::filter_services(["heart_rate"]).optional_services(["cycling_power"])
}

fn characteristic_read_value(list: &mut CaseList) {
    list.push(Case::target("body_sensor_location").must_disconnect(true));
    list.push(Case::target("gap.reconnection_address").must_disconnect(false));
    list.push(Case::target("serial_number_string").must_disconnect(false));
    list.push(Case::target(alias(0x00002a03)).must_disconnect(false));
    list.push(Case::target(alias(0x00002a25)).must_disconnect(false));
    list.push(Case::target("00002a03-0000-1000-8000-00805f9b34fb").must_disconnect(false));
    list.push(Case::target("00002a25-0000-1000-8000-00805f9b34fb").must_disconnect(false));
    list.push(Case::target("body_sensor_location").must_disconnect(false));
    list.push(Case::target(alias(0x00002a38)).must_disconnect(false));
    list.push(Case::target("00002a38-0000-1000-8000-00805f9b34fb").must_disconnect(false));
    list.push(Case::target("heart_rate_control_point").must_disconnect(false));
}

fn characteristic_write_value(list: &mut CaseList) {
    list.push(Case::target(alias(0x2345)).write([11]).must_disconnect(true));
    list.push(
        Case::target(alias(0x2345))
            .write(zeroed_payload(OVERSIZED_WRITE_LEN))
            .must_disconnect(false),
    );
    list.push(Case::target("gap.reconnection_address").write([1]).must_disconnect(false));
    list.push(Case::target("serial_number_string").write([2]).must_disconnect(false));
    list.push(Case::target(alias(0x00002a02)).write([3]).must_disconnect(false));
    list.push(Case::target(alias(0x00002a03)).write([3]).must_disconnect(false));
    list.push(Case::target(alias(0x00002a25)).write([4]).must_disconnect(false));
    list.push(
        Case::target("00002a02-0000-1000-8000-00805f9b34fb")
            .write([6])
            .must_disconnect(false),
    );
    list.push(
        Case::target("00002a03-0000-1000-8000-00805f9b34fb")
            .write([5])
            .must_disconnect(false),
    );
    list.push(
        Case::target("00002a25-0000-1000-8000-00805f9b34fb")
            .write([6])
            .must_disconnect(false),
    );
    // No disconnect expectation recorded
    list.push(Case::target(alias(0x2345)).write([11]));
    list.push(
        Case::target("00002345-0000-1000-8000-00805f9b34fb")
            .write([22])
            .must_disconnect(false),
    );
}

fn get_characteristic(list: &mut CaseList) {
    let targets: [Identifier; 17] = [
        "not_a_characteristic_name".into(),
        "battery_level".into(),
        "1234567891000-1000-8000-00805f9b34fb".into(),
        "11".into(),
        "12345678-1234-1234-1234-123456789abc".into(),
        "00000000-0000-0000-0000-000000000000".into(),
        alias(0x0000),
        alias(0x000000000), // 9 digits
        alias(0x2a19),
        alias(0x12345678),
        alias(0x00002a19),
        alias(0x00002a03),
        alias(0x00002a25),
        alias(0x2a03),
        alias(0x2a25),
        "00002a03-0000-1000-8000-00805f9b34fb".into(),
        "00002a25-0000-1000-8000-00805f9b34fb".into(),
    ];
    for target in targets {
        list.push(
            Case::target(target)
                .service("battery_service")
                .options(battery_service_options()),
        );
    }
}

fn get_characteristics(list: &mut CaseList) {
    list.push(Case::in_service("battery_service").options(battery_service_options()));

    let targets: [Identifier; 17] = [
        "not_a_characteristic_name".into(),
        "body_sensor_location".into(),
        "1234567891000-1000-8000-00805f9b34fb".into(),
        "11".into(),
        "12345678-1234-1234-1234-123456789abc".into(),
        "00000000-0000-0000-0000-000000000000".into(),
        alias(0x0000),
        alias(0x000000000), // 9 digits
        alias(0x2a38),
        alias(0x12345678),
        alias(0x00002a38),
        alias(0x00002a03),
        alias(0x00002a25),
        alias(0x2a03),
        alias(0x2a25),
        "00002a03-0000-1000-8000-00805f9b34fb".into(),
        "00002a25-0000-1000-8000-00805f9b34fb".into(),
    ];
    for target in targets {
        list.push(
            Case::target(target)
                .service("heart_rate")
                .options(heart_rate_options()),
        );
    }
}

fn descriptor_read_value(list: &mut CaseList) {
    for must_disconnect in [true, false] {
        list.push(
            Case::target("gatt.client_characteristic_configuration")
                .must_disconnect(must_disconnect),
        );
        list.push(Case::target(alias(0x2902)).must_disconnect(must_disconnect));
        list.push(
            Case::target("00002902-0000-1000-8000-00805f9b34fb").must_disconnect(must_disconnect),
        );
    }
}

fn descriptor_write_value(list: &mut CaseList) {
    list.push(
        Case::target("00003456-0000-1000-8000-00805f9b34fb")
            .write([11])
            .must_disconnect(true),
    );
    list.push(
        Case::target("00003456-0000-1000-8000-00805f9b34fb")
            .write(zeroed_payload(OVERSIZED_WRITE_LEN))
            .must_disconnect(false),
    );
    list.push(
        Case::target("00002902-0000-1000-8000-00805f9b34fb")
            .write([1])
            .must_disconnect(false),
    );
    list.push(Case::target(alias(0x00002902)).write([2]).must_disconnect(false));
    list.push(Case::target(alias(0x3456)).write([11]).must_disconnect(false));
    list.push(
        Case::target("00003456-0000-1000-8000-00805f9b34fb")
            .write([22])
            .must_disconnect(false),
    );
}
