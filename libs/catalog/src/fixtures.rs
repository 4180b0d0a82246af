//! Identifier fixtures for the `BluetoothUUID` and lookup scenarios
//!
//! Named triples exercise the same entity by alias, name and UUID. The loose
//! constants cover the boundaries of alias expansion and UUID validation.

use gatt_types::AttributeKind;

/// Base UUID into which aliases are embedded
pub const BASE_UUID: &str = "00000000-0000-1000-8000-00805f9b34fb";

/// A raw alias and the UUID `canonicalUUID()` must produce for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasFixture {
    pub alias: u64,
    pub uuid: &'static str,
}

pub const DEADBEEF: AliasFixture = AliasFixture {
    alias: 0xDEADBEEF,
    uuid: "deadbeef-0000-1000-8000-00805f9b34fb",
};

/// Nine hex digits; only the low 32 bits survive the conversion
pub const ADEADBEEF: AliasFixture = AliasFixture {
    alias: 0xADEADBEEF,
    uuid: "deadbeef-0000-1000-8000-00805f9b34fb",
};

pub const STRING_ALIAS: &str = "deadbeef";
pub const ALL_CAPS_UUID: &str = "1A2B3C4D-5E6F-7A8B-9C0D-1E2F3A4B5C6D";
pub const BASIC_UUID: &str = "1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d";
pub const INVALID_CHARACTER_UUID: &str = "0000000g-0000-1000-8000-00805f9b34fb";
pub const MAX_UUID: &str = "ffffffff-0000-1000-8000-00805f9b34fb";
pub const BASE_ALIAS: u64 = 0x0;
pub const NINE_DIGITS: u64 = 0xfffffffff;
pub const THIRTEEN_DIGITS: u64 = 0xfffffffffffff;
pub const FOURTEEN_DIGITS: u64 = 0xffffffffffffff;

/// Malformed on purpose: the last group has 13 digits
pub const BLOCKLIST_DESCRIPTOR_UUID: &str = "07711111-6104-0970-7011-1107105110aaa";
pub const CHARACTERISTIC_USER_DESCRIPTION_UUID: &str = "00002901-0000-1000-8000-00805f9b34fb";

/// One entity spelled all three ways
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierTriple {
    pub kind: AttributeKind,
    pub alias: u32,
    pub name: &'static str,
    pub uuid: &'static str,
}

macro_rules! triple {
    ($ident:ident, $kind:ident, $alias:expr, $name:expr, $uuid:expr) => {
        pub const $ident: IdentifierTriple = IdentifierTriple {
            kind: AttributeKind::$kind,
            alias: $alias,
            name: $name,
            uuid: $uuid,
        };
    };
}

triple!(GENERIC_ACCESS, Service, 0x1800, "generic_access", "00001800-0000-1000-8000-00805f9b34fb");
triple!(DEVICE_NAME, Characteristic, 0x2a00, "gap.device_name", "00002a00-0000-1000-8000-00805f9b34fb");
triple!(
    RECONNECTION_ADDRESS,
    Characteristic,
    0x2a03,
    "gap.reconnection_address",
    "00002a03-0000-1000-8000-00805f9b34fb"
);
triple!(HEART_RATE, Service, 0x180d, "heart_rate", "0000180d-0000-1000-8000-00805f9b34fb");
triple!(
    HEART_RATE_MEASUREMENT,
    Characteristic,
    0x2a37,
    "heart_rate_measurement",
    "00002a37-0000-1000-8000-00805f9b34fb"
);
triple!(
    BODY_SENSOR_LOCATION,
    Characteristic,
    0x2a38,
    "body_sensor_location",
    "00002a38-0000-1000-8000-00805f9b34fb"
);
triple!(GLUCOSE, Service, 0x1808, "glucose", "00001808-0000-1000-8000-00805f9b34fb");
triple!(BATTERY_SERVICE, Service, 0x180f, "battery_service", "0000180f-0000-1000-8000-00805f9b34fb");
triple!(BATTERY_LEVEL, Characteristic, 0x2a19, "battery_level", "00002a19-0000-1000-8000-00805f9b34fb");
triple!(TX_POWER, Service, 0x1804, "tx_power", "00001804-0000-1000-8000-00805f9b34fb");
triple!(
    HUMAN_INTERFACE_DEVICE,
    Service,
    0x1812,
    "human_interface_device",
    "00001812-0000-1000-8000-00805f9b34fb"
);
triple!(
    DEVICE_INFORMATION,
    Service,
    0x180a,
    "device_information",
    "0000180a-0000-1000-8000-00805f9b34fb"
);
triple!(
    PERIPHERAL_PRIVACY_FLAG,
    Characteristic,
    0x2a02,
    "gap.peripheral_privacy_flag",
    "00002a02-0000-1000-8000-00805f9b34fb"
);
triple!(
    SERIAL_NUMBER_STRING,
    Characteristic,
    0x2a25,
    "serial_number_string",
    "00002a25-0000-1000-8000-00805f9b34fb"
);
triple!(
    CLIENT_CHARACTERISTIC_CONFIGURATION,
    Descriptor,
    0x2902,
    "gatt.client_characteristic_configuration",
    "00002902-0000-1000-8000-00805f9b34fb"
);
triple!(
    NUMBER_OF_DIGITALS,
    Descriptor,
    0x2909,
    "number_of_digitals",
    "00002909-0000-1000-8000-00805f9b34fb"
);
triple!(
    ALERT_NOTIFICATION,
    Service,
    0x1811,
    "alert_notification",
    "00001811-0000-1000-8000-00805f9b34fb"
);
triple!(
    AEROBIC_HEART_RATE_LOWER_LIMIT,
    Characteristic,
    0x2a7e,
    "aerobic_heart_rate_lower_limit",
    "00002a7e-0000-1000-8000-00805f9b34fb"
);
triple!(
    CHARACTERISTIC_EXTENDED_PROPERTIES,
    Descriptor,
    0x2900,
    "gatt.characteristic_extended_properties",
    "00002900-0000-1000-8000-00805f9b34fb"
);

pub const TRIPLES: &[IdentifierTriple] = &[
    GENERIC_ACCESS,
    DEVICE_NAME,
    RECONNECTION_ADDRESS,
    HEART_RATE,
    HEART_RATE_MEASUREMENT,
    BODY_SENSOR_LOCATION,
    GLUCOSE,
    BATTERY_SERVICE,
    BATTERY_LEVEL,
    TX_POWER,
    HUMAN_INTERFACE_DEVICE,
    DEVICE_INFORMATION,
    PERIPHERAL_PRIVACY_FLAG,
    SERIAL_NUMBER_STRING,
    CLIENT_CHARACTERISTIC_CONFIGURATION,
    NUMBER_OF_DIGITALS,
    ALERT_NOTIFICATION,
    AEROBIC_HEART_RATE_LOWER_LIMIT,
    CHARACTERISTIC_EXTENDED_PROPERTIES,
];
