//! Default configuration values
//!
//! Used when neither the configuration files nor the environment set a value.

/// Attribute value limits
pub mod limits {
    /// Maximum GATT attribute value length (bytes)
    pub const MAX_ATTRIBUTE_VALUE_LENGTH: usize = 512;
}

/// Logging defaults
pub mod logging {
    pub const LEVEL: &str = "info";
    pub const JSON: bool = false;

    /// Levels accepted in `[logging] level`
    pub const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
}

/// File locations
pub mod paths {
    /// Base configuration file, relative to the working directory
    pub const BASE_CONFIG: &str = "config/fixtures.toml";

    /// Directory holding `<environment>.toml` overlays, relative to the base file
    pub const ENVIRONMENTS_DIR: &str = "environments";
}

/// Prefix of configuration environment variables (`GATTFIX_LIMITS__...`)
pub const ENV_PREFIX: &str = "GATTFIX";
