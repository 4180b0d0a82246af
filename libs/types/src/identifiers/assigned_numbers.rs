//! Bluetooth SIG assigned numbers for GATT services, characteristics and
//! descriptors, under their Web Bluetooth names, plus the unnamed fixture
//! entities exposed by the mock adapters.

use super::AttributeKind;

/// A 16-bit assigned number and its canonical name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignedNumber {
    pub alias: u32,
    pub name: &'static str,
}

/// An entity known only by alias or by full uuid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureEntity {
    pub kind: AttributeKind,
    pub alias: Option<u32>,
    pub uuid: Option<&'static str>,
}

macro_rules! assigned {
    ($alias:expr, $name:expr) => {
        AssignedNumber {
            alias: $alias,
            name: $name,
        }
    };
}

// Test services
pub const BLOCKLIST_TEST_SERVICE_UUID: &str = "611c954a-263b-4f4a-aab6-01ddb953f985";
pub const REQUEST_DISCONNECTION_SERVICE_UUID: &str = "01d7d889-7451-419f-aeb8-d65e7b9277af";
pub const FIRMWARE_UPDATE_SERVICE_UUID: &str = "00001530-1212-efde-1523-785feabcd123";
pub const OVER_THE_AIR_DOWNLOAD_SERVICE_UUID: &str = "f000ffc0-0451-4000-b000-000000000000";

// Test characteristics
pub const BLOCKLIST_EXCLUDE_READS_CHARACTERISTIC_UUID: &str =
    "bad1c9a2-9a5b-4015-8b60-1579bbbf2135";
pub const REQUEST_DISCONNECTION_CHARACTERISTIC_UUID: &str =
    "01d7d88a-7451-419f-aeb8-d65e7b9277af";

// Test descriptors
pub const BLOCKLIST_EXCLUDE_READS_DESCRIPTOR_UUID: &str = "aaaaaaaa-aaaa-1181-0510-810819516110";

/// Characteristic written by the write-value scenarios
pub const WRITE_TEST_CHARACTERISTIC_ALIAS: u32 = 0x2345;
/// Descriptor written by the write-value scenarios
pub const WRITE_TEST_DESCRIPTOR_ALIAS: u32 = 0x3456;

pub const SERVICES: &[AssignedNumber] = &[
    assigned!(0x1800, "generic_access"),
    assigned!(0x1801, "generic_attribute"),
    assigned!(0x1802, "immediate_alert"),
    assigned!(0x1803, "link_loss"),
    assigned!(0x1804, "tx_power"),
    assigned!(0x1805, "current_time"),
    assigned!(0x1806, "reference_time_update"),
    assigned!(0x1807, "next_dst_change"),
    assigned!(0x1808, "glucose"),
    assigned!(0x1809, "health_thermometer"),
    assigned!(0x180a, "device_information"),
    assigned!(0x180d, "heart_rate"),
    assigned!(0x180e, "phone_alert_status"),
    assigned!(0x180f, "battery_service"),
    assigned!(0x1810, "blood_pressure"),
    assigned!(0x1811, "alert_notification"),
    assigned!(0x1812, "human_interface_device"),
    assigned!(0x1813, "scan_parameters"),
    assigned!(0x1814, "running_speed_and_cadence"),
    assigned!(0x1815, "automation_io"),
    assigned!(0x1816, "cycling_speed_and_cadence"),
    assigned!(0x1818, "cycling_power"),
    assigned!(0x1819, "location_and_navigation"),
    assigned!(0x181a, "environmental_sensing"),
    assigned!(0x181b, "body_composition"),
    assigned!(0x181c, "user_data"),
    assigned!(0x181d, "weight_scale"),
    assigned!(0x181e, "bond_management"),
    assigned!(0x181f, "continuous_glucose_monitoring"),
    assigned!(0x1820, "internet_protocol_support"),
    assigned!(0x1821, "indoor_positioning"),
    assigned!(0x1822, "pulse_oximeter"),
    assigned!(0x1823, "http_proxy"),
    assigned!(0x1824, "transport_discovery"),
    assigned!(0x1825, "object_transfer"),
    assigned!(0x1826, "fitness_machine"),
    assigned!(0x1827, "mesh_provisioning"),
    assigned!(0x1828, "mesh_proxy"),
    assigned!(0x1829, "reconnection_configuration"),
];

pub const CHARACTERISTICS: &[AssignedNumber] = &[
    assigned!(0x2a00, "gap.device_name"),
    assigned!(0x2a01, "gap.appearance"),
    assigned!(0x2a02, "gap.peripheral_privacy_flag"),
    assigned!(0x2a03, "gap.reconnection_address"),
    assigned!(0x2a04, "gap.peripheral_preferred_connection_parameters"),
    assigned!(0x2a05, "gatt.service_changed"),
    assigned!(0x2a06, "alert_level"),
    assigned!(0x2a07, "tx_power_level"),
    assigned!(0x2a08, "date_time"),
    assigned!(0x2a09, "day_of_week"),
    assigned!(0x2a0a, "day_date_time"),
    assigned!(0x2a0c, "exact_time_256"),
    assigned!(0x2a0d, "dst_offset"),
    assigned!(0x2a0e, "time_zone"),
    assigned!(0x2a0f, "local_time_information"),
    assigned!(0x2a11, "time_with_dst"),
    assigned!(0x2a12, "time_accuracy"),
    assigned!(0x2a13, "time_source"),
    assigned!(0x2a14, "reference_time_information"),
    assigned!(0x2a16, "time_update_control_point"),
    assigned!(0x2a17, "time_update_state"),
    assigned!(0x2a18, "glucose_measurement"),
    assigned!(0x2a19, "battery_level"),
    assigned!(0x2a1c, "temperature_measurement"),
    assigned!(0x2a1d, "temperature_type"),
    assigned!(0x2a1e, "intermediate_temperature"),
    assigned!(0x2a21, "measurement_interval"),
    assigned!(0x2a22, "boot_keyboard_input_report"),
    assigned!(0x2a23, "system_id"),
    assigned!(0x2a24, "model_number_string"),
    assigned!(0x2a25, "serial_number_string"),
    assigned!(0x2a26, "firmware_revision_string"),
    assigned!(0x2a27, "hardware_revision_string"),
    assigned!(0x2a28, "software_revision_string"),
    assigned!(0x2a29, "manufacturer_name_string"),
    assigned!(0x2a2a, "ieee_11073-20601_regulatory_certification_data_list"),
    assigned!(0x2a2b, "current_time"),
    assigned!(0x2a2c, "magnetic_declination"),
    assigned!(0x2a31, "scan_refresh"),
    assigned!(0x2a32, "boot_keyboard_output_report"),
    assigned!(0x2a33, "boot_mouse_input_report"),
    assigned!(0x2a34, "glucose_measurement_context"),
    assigned!(0x2a35, "blood_pressure_measurement"),
    assigned!(0x2a36, "intermediate_cuff_pressure"),
    assigned!(0x2a37, "heart_rate_measurement"),
    assigned!(0x2a38, "body_sensor_location"),
    assigned!(0x2a39, "heart_rate_control_point"),
    assigned!(0x2a3f, "alert_status"),
    assigned!(0x2a40, "ringer_control_point"),
    assigned!(0x2a41, "ringer_setting"),
    assigned!(0x2a42, "alert_category_id_bit_mask"),
    assigned!(0x2a43, "alert_category_id"),
    assigned!(0x2a44, "alert_notification_control_point"),
    assigned!(0x2a45, "unread_alert_status"),
    assigned!(0x2a46, "new_alert"),
    assigned!(0x2a47, "supported_new_alert_category"),
    assigned!(0x2a48, "supported_unread_alert_category"),
    assigned!(0x2a49, "blood_pressure_feature"),
    assigned!(0x2a4a, "hid_information"),
    assigned!(0x2a4b, "report_map"),
    assigned!(0x2a4c, "hid_control_point"),
    assigned!(0x2a4d, "report"),
    assigned!(0x2a4e, "protocol_mode"),
    assigned!(0x2a4f, "scan_interval_window"),
    assigned!(0x2a50, "pnp_id"),
    assigned!(0x2a51, "glucose_feature"),
    assigned!(0x2a52, "record_access_control_point"),
    assigned!(0x2a53, "rsc_measurement"),
    assigned!(0x2a54, "rsc_feature"),
    assigned!(0x2a55, "sc_control_point"),
    assigned!(0x2a56, "digital"),
    assigned!(0x2a58, "analog"),
    assigned!(0x2a5a, "aggregate"),
    assigned!(0x2a5b, "csc_measurement"),
    assigned!(0x2a5c, "csc_feature"),
    assigned!(0x2a5d, "sensor_location"),
    assigned!(0x2a63, "cycling_power_measurement"),
    assigned!(0x2a64, "cycling_power_vector"),
    assigned!(0x2a65, "cycling_power_feature"),
    assigned!(0x2a66, "cycling_power_control_point"),
    assigned!(0x2a67, "location_and_speed"),
    assigned!(0x2a68, "navigation"),
    assigned!(0x2a69, "position_quality"),
    assigned!(0x2a6a, "ln_feature"),
    assigned!(0x2a6b, "ln_control_point"),
    assigned!(0x2a6c, "elevation"),
    assigned!(0x2a6d, "pressure"),
    assigned!(0x2a6e, "temperature"),
    assigned!(0x2a6f, "humidity"),
    assigned!(0x2a70, "true_wind_speed"),
    assigned!(0x2a71, "true_wind_direction"),
    assigned!(0x2a72, "apparent_wind_speed"),
    assigned!(0x2a73, "apparent_wind_direction"),
    assigned!(0x2a74, "gust_factor"),
    assigned!(0x2a75, "pollen_concentration"),
    assigned!(0x2a76, "uv_index"),
    assigned!(0x2a77, "irradiance"),
    assigned!(0x2a78, "rainfall"),
    assigned!(0x2a79, "wind_chill"),
    assigned!(0x2a7a, "heat_index"),
    assigned!(0x2a7b, "dew_point"),
    assigned!(0x2a7d, "descriptor_value_changed"),
    assigned!(0x2a7e, "aerobic_heart_rate_lower_limit"),
    assigned!(0x2a7f, "aerobic_threshold"),
    assigned!(0x2a80, "age"),
    assigned!(0x2a81, "anaerobic_heart_rate_lower_limit"),
    assigned!(0x2a82, "anaerobic_heart_rate_upper_limit"),
    assigned!(0x2a83, "anaerobic_threshold"),
    assigned!(0x2a84, "aerobic_heart_rate_upper_limit"),
    assigned!(0x2a85, "date_of_birth"),
    assigned!(0x2a86, "date_of_threshold_assessment"),
    assigned!(0x2a87, "email_address"),
    assigned!(0x2a88, "fat_burn_heart_rate_lower_limit"),
    assigned!(0x2a89, "fat_burn_heart_rate_upper_limit"),
    assigned!(0x2a8a, "first_name"),
    assigned!(0x2a8b, "five_zone_heart_rate_limits"),
    assigned!(0x2a8c, "gender"),
    assigned!(0x2a8d, "heart_rate_max"),
    assigned!(0x2a8e, "height"),
    assigned!(0x2a8f, "hip_circumference"),
    assigned!(0x2a90, "last_name"),
    assigned!(0x2a91, "maximum_recommended_heart_rate"),
    assigned!(0x2a92, "resting_heart_rate"),
    assigned!(0x2a93, "sport_type_for_aerobic_and_anaerobic_thresholds"),
    assigned!(0x2a94, "three_zone_heart_rate_limits"),
    assigned!(0x2a95, "two_zone_heart_rate_limit"),
    assigned!(0x2a96, "vo2_max"),
    assigned!(0x2a97, "waist_circumference"),
    assigned!(0x2a98, "weight"),
    assigned!(0x2a99, "database_change_increment"),
    assigned!(0x2a9a, "user_index"),
    assigned!(0x2a9b, "body_composition_feature"),
    assigned!(0x2a9c, "body_composition_measurement"),
    assigned!(0x2a9d, "weight_measurement"),
    assigned!(0x2a9e, "weight_scale_feature"),
    assigned!(0x2a9f, "user_control_point"),
    assigned!(0x2aa0, "magnetic_flux_density_2D"),
    assigned!(0x2aa1, "magnetic_flux_density_3D"),
    assigned!(0x2aa2, "language"),
    assigned!(0x2aa3, "barometric_pressure_trend"),
];

pub const DESCRIPTORS: &[AssignedNumber] = &[
    assigned!(0x2900, "gatt.characteristic_extended_properties"),
    assigned!(0x2901, "gatt.characteristic_user_description"),
    assigned!(0x2902, "gatt.client_characteristic_configuration"),
    assigned!(0x2903, "gatt.server_characteristic_configuration"),
    assigned!(0x2904, "gatt.characteristic_presentation_format"),
    assigned!(0x2905, "gatt.characteristic_aggregate_format"),
    assigned!(0x2906, "valid_range"),
    assigned!(0x2907, "external_report_reference"),
    assigned!(0x2908, "report_reference"),
    assigned!(0x2909, "number_of_digitals"),
    assigned!(0x290a, "value_trigger_setting"),
    assigned!(0x290b, "es_configuration"),
    assigned!(0x290c, "es_measurement"),
    assigned!(0x290d, "es_trigger_setting"),
    assigned!(0x290e, "time_trigger_setting"),
];

/// Entities the mock adapters expose without a standard name
pub const TEST_FIXTURES: &[FixtureEntity] = &[
    FixtureEntity {
        kind: AttributeKind::Service,
        alias: None,
        uuid: Some(BLOCKLIST_TEST_SERVICE_UUID),
    },
    FixtureEntity {
        kind: AttributeKind::Service,
        alias: None,
        uuid: Some(REQUEST_DISCONNECTION_SERVICE_UUID),
    },
    FixtureEntity {
        kind: AttributeKind::Service,
        alias: None,
        uuid: Some(FIRMWARE_UPDATE_SERVICE_UUID),
    },
    FixtureEntity {
        kind: AttributeKind::Service,
        alias: None,
        uuid: Some(OVER_THE_AIR_DOWNLOAD_SERVICE_UUID),
    },
    FixtureEntity {
        kind: AttributeKind::Characteristic,
        alias: Some(WRITE_TEST_CHARACTERISTIC_ALIAS),
        uuid: None,
    },
    FixtureEntity {
        kind: AttributeKind::Characteristic,
        alias: None,
        uuid: Some(BLOCKLIST_EXCLUDE_READS_CHARACTERISTIC_UUID),
    },
    FixtureEntity {
        kind: AttributeKind::Characteristic,
        alias: None,
        uuid: Some(REQUEST_DISCONNECTION_CHARACTERISTIC_UUID),
    },
    FixtureEntity {
        kind: AttributeKind::Descriptor,
        alias: Some(WRITE_TEST_DESCRIPTOR_ALIAS),
        uuid: None,
    },
    FixtureEntity {
        kind: AttributeKind::Descriptor,
        alias: None,
        uuid: Some(BLOCKLIST_EXCLUDE_READS_DESCRIPTOR_UUID),
    },
];

/// Assigned-number table for one attribute kind
pub fn table(kind: AttributeKind) -> &'static [AssignedNumber] {
    match kind {
        AttributeKind::Service => SERVICES,
        AttributeKind::Characteristic => CHARACTERISTICS,
        AttributeKind::Descriptor => DESCRIPTORS,
    }
}
