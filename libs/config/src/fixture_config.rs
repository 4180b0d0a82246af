//! Fixture Configuration Module
//!
//! Loads the fixture tool's settings from a base TOML file, an optional
//! environment overlay and `GATTFIX_` environment variables, in that order.

use crate::defaults;
use anyhow::{bail, Context, Result};
use config_crate::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Main fixture configuration structure
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FixtureConfig {
    /// Limits applied by the outcome oracle
    pub limits: LimitsConfig,

    /// Tracing subscriber settings
    pub logging: LoggingConfig,

    /// Records added on top of the standard identifier tables
    pub registry: RegistryConfig,

    /// Exclusions added on top of the standard blocklist
    pub blocklist: BlocklistConfig,

    /// Where validation reports are written
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_attribute_value_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_attribute_value_length: defaults::limits::MAX_ATTRIBUTE_VALUE_LENGTH,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::logging::LEVEL.to_string(),
            json: defaults::logging::JSON,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryConfig {
    pub extra: Vec<ExtraRecord>,
}

/// A vendor record as written in `[[registry.extra]]`
///
/// `kind` is one of `service`, `characteristic` or `descriptor`; it is parsed
/// when the registry is built so this crate stays free of registry types.
/// At least one of `name`, `alias` and `uuid` must be set.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ExtraRecord {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BlocklistConfig {
    pub extra: Vec<ExtraBlocklistEntry>,
}

/// A blocklist line as written in `[[blocklist.extra]]`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ExtraBlocklistEntry {
    pub uuid: String,
    /// `exclude`, `exclude-reads` or `exclude-writes`
    pub exclusion: String,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl FixtureConfig {
    /// Load configuration from files with environment overrides
    ///
    /// An explicit `base_path` must exist. Without one, the default
    /// `config/fixtures.toml` is used when present and built-in defaults
    /// otherwise. The `environment` overlay lives next to the base file in
    /// `environments/<environment>.toml`.
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        let (base, required) = match base_path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(defaults::paths::BASE_CONFIG), false),
        };

        let mut builder = Config::builder().add_source(File::from(base.as_path()).required(required));

        if let Some(env) = environment {
            let env_file = base
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(defaults::paths::ENVIRONMENTS_DIR)
                .join(format!("{}.toml", env));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        // GATTFIX_LIMITS__MAX_ATTRIBUTE_VALUE_LENGTH=1024
        builder = builder.add_source(
            Environment::with_prefix(defaults::ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let loaded: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        debug!(
            extra_records = loaded.registry.extra.len(),
            extra_blocklist = loaded.blocklist.extra.len(),
            "Loaded fixture configuration from {:?}",
            base
        );
        Ok(loaded)
    }

    /// Parse configuration from TOML text without touching the filesystem
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Expand environment variables in path values
    pub fn expand_env_vars(&mut self) -> Result<()> {
        if let Some(path) = &self.report.path {
            let expanded = shellexpand::env(path).context("Failed to expand report path")?;
            self.report.path = Some(expanded.to_string());
        }

        for record in &mut self.registry.extra {
            if let Some(uuid) = &record.uuid {
                let expanded = shellexpand::env(uuid).context("Failed to expand record UUID")?;
                record.uuid = Some(expanded.to_string());
            }
        }

        Ok(())
    }

    /// Reject settings no consumer can honour
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_attribute_value_length == 0 {
            bail!("limits.max_attribute_value_length must be greater than 0");
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !defaults::logging::LEVELS.contains(&level.as_str()) {
            bail!(
                "logging.level {:?} is not one of {:?}",
                self.logging.level,
                defaults::logging::LEVELS
            );
        }

        for (index, record) in self.registry.extra.iter().enumerate() {
            let unnamed = record.name.as_deref().map_or(true, str::is_empty);
            if unnamed && record.alias.is_none() && record.uuid.is_none() {
                bail!("registry.extra[{}] has no name, alias or uuid", index);
            }
        }

        Ok(())
    }

    /// Serialize back to TOML, e.g. for `print-config`
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Convenience function to load, expand and validate configuration
pub fn load_config(base_path: Option<&Path>, environment: Option<&str>) -> Result<FixtureConfig> {
    let mut config = FixtureConfig::load(base_path, environment)?;
    config.expand_env_vars()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const BASE: &str = r#"
[limits]
max_attribute_value_length = 600

[logging]
level = "debug"

[[registry.extra]]
kind = "service"
name = "vendor_service"
uuid = "0000fff0-0000-1000-8000-00805f9b34fb"

[[registry.extra]]
kind = "characteristic"
name = "vendor_level"
alias = 0xfff1

[[blocklist.extra]]
uuid = "0000fff1-0000-1000-8000-00805f9b34fb"
exclusion = "exclude-writes"

[report]
path = "reports/catalog.json"
"#;

    #[test]
    fn test_load_base_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("fixtures.toml");
        fs::write(&config_path, BASE).unwrap();

        let config = FixtureConfig::load(Some(&config_path), None).unwrap();

        assert_eq!(config.limits.max_attribute_value_length, 600);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.json);
        assert_eq!(config.registry.extra.len(), 2);
        assert_eq!(config.registry.extra[1].alias, Some(0xfff1));
        assert_eq!(config.registry.extra[1].uuid, None);
        assert_eq!(config.blocklist.extra[0].exclusion, "exclude-writes");
        assert_eq!(config.report.path.as_deref(), Some("reports/catalog.json"));
    }

    #[test]
    fn test_environment_override() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("fixtures.toml");
        fs::write(&config_path, BASE).unwrap();
        fs::create_dir(dir.path().join("environments")).unwrap();
        fs::write(
            dir.path().join("environments").join("ci.toml"),
            "[logging]\njson = true\nlevel = \"warn\"\n",
        )
        .unwrap();

        let config = FixtureConfig::load(Some(&config_path), Some("ci")).unwrap();
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "warn");
        // Untouched sections keep the base values
        assert_eq!(config.limits.max_attribute_value_length, 600);

        // A missing overlay only warns
        let config = FixtureConfig::load(Some(&config_path), Some("staging")).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(FixtureConfig::load(Some(&missing), None).is_err());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FixtureConfig::from_toml_str("").unwrap();
        assert_eq!(config, FixtureConfig::default());
        assert_eq!(config.limits.max_attribute_value_length, 512);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = FixtureConfig::default();
        config.limits.max_attribute_value_length = 0;
        assert!(config.validate().is_err());

        let mut config = FixtureConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = FixtureConfig::default();
        config.logging.level = "WARN".to_string();
        assert!(config.validate().is_ok());

        let mut config = FixtureConfig::default();
        config.registry.extra.push(ExtraRecord {
            kind: "service".to_string(),
            name: None,
            alias: None,
            uuid: None,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extra_record_without_name() {
        let config = FixtureConfig::from_toml_str(
            "[[registry.extra]]\nkind = \"characteristic\"\nalias = 0xfff1\n\n\
             [[registry.extra]]\nkind = \"service\"\nuuid = \"0000fff0-0000-1000-8000-00805f9b34fb\"\n",
        )
        .unwrap();
        assert_eq!(config.registry.extra.len(), 2);
        assert_eq!(config.registry.extra[0].name, None);
        assert_eq!(config.registry.extra[0].alias, Some(0xfff1));
        assert_eq!(config.registry.extra[1].name, None);
        assert!(config.validate().is_ok());

        let rendered = config.to_toml().unwrap();
        assert!(!rendered.contains("name"));
    }

    #[test]
    fn test_shipped_config_needs_no_environment() {
        let shipped = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/fixtures.toml");
        let mut config = FixtureConfig::load(Some(&shipped), Some("ci")).unwrap();
        config.expand_env_vars().unwrap();
        config.validate().unwrap();

        let report = config.report.path.as_deref().unwrap();
        assert!(!report.contains('$'));
        assert!(Path::new(report).is_relative());
        assert!(config.logging.json);
    }

    #[test]
    fn test_expand_env_vars_leaves_plain_paths() {
        let mut config = FixtureConfig::from_toml_str(BASE).unwrap();
        config.expand_env_vars().unwrap();
        assert_eq!(config.report.path.as_deref(), Some("reports/catalog.json"));

        config.report.path = Some("${GATTFIX_TEST_UNSET_VARIABLE}/out.json".to_string());
        assert!(config.expand_env_vars().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FixtureConfig::from_toml_str(BASE).unwrap();
        let rendered = config.to_toml().unwrap();
        let parsed: FixtureConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
