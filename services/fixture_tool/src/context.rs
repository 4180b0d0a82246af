//! Registry, blocklist and limits assembled from configuration

use anyhow::{Context, Result};
use fixture_config::{ExtraBlocklistEntry, ExtraRecord, FixtureConfig};
use gatt_catalog::{Limits, Oracle};
use gatt_types::{
    AttributeKind, Blocklist, CanonicalUuid, Exclusion, IdentifierRegistry, RecordSpec,
    RegistryBuilder,
};
use tracing::{debug, info, warn};

/// Everything a command needs to evaluate scenarios
#[derive(Debug, Clone)]
pub struct FixtureContext {
    pub registry: IdentifierRegistry,
    pub blocklist: Blocklist,
    pub limits: Limits,
    /// Configured extras that were skipped
    pub rejected_extras: usize,
}

impl FixtureContext {
    /// Standard tables extended with the configured extras
    ///
    /// Extras that fail to parse or conflict with an existing record are
    /// logged and skipped. Invalid limits are an error.
    pub fn from_config(config: &FixtureConfig) -> Result<Self> {
        let limits = Limits {
            max_attribute_value_length: config.limits.max_attribute_value_length,
        };
        limits
            .validate()
            .map_err(anyhow::Error::msg)
            .context("Invalid limits")?;

        let mut rejected_extras = 0;

        let mut builder = RegistryBuilder::with_standard();
        for extra in &config.registry.extra {
            if let Err(e) = add_record(&mut builder, extra) {
                warn!(
                    name = extra.name.as_deref().unwrap_or(""),
                    kind = %extra.kind,
                    "Skipping registry extra: {:#}",
                    e
                );
                rejected_extras += 1;
            }
        }
        let registry = builder.build();

        let mut blocklist = Blocklist::standard().clone();
        for extra in &config.blocklist.extra {
            if let Err(e) = add_exclusion(&mut blocklist, extra) {
                warn!(uuid = %extra.uuid, "Skipping blocklist extra: {:#}", e);
                rejected_extras += 1;
            }
        }

        info!(
            records = registry.len(),
            blocklisted = blocklist.len(),
            max_attribute_value_length = limits.max_attribute_value_length,
            rejected_extras,
            "Fixture context ready"
        );

        Ok(Self {
            registry,
            blocklist,
            limits,
            rejected_extras,
        })
    }

    /// Standard tables with default limits
    pub fn standard() -> Self {
        Self {
            registry: IdentifierRegistry::standard().clone(),
            blocklist: Blocklist::standard().clone(),
            limits: Limits::default(),
            rejected_extras: 0,
        }
    }

    pub fn oracle(&self) -> Oracle<'_> {
        Oracle::new(&self.registry, &self.blocklist, self.limits)
    }
}

fn add_record(builder: &mut RegistryBuilder, extra: &ExtraRecord) -> Result<()> {
    let kind: AttributeKind = extra.kind.parse().map_err(anyhow::Error::msg)?;
    let mut spec = RecordSpec::new(kind);
    if let Some(name) = extra.name.as_deref().filter(|name| !name.is_empty()) {
        spec = spec.name(name);
    }
    if let Some(alias) = extra.alias {
        spec = spec.alias(alias);
    }
    if let Some(uuid) = &extra.uuid {
        spec = spec.uuid(uuid.as_str());
    }
    let record = builder.add(spec)?;
    debug!(%record, "Added registry extra");
    Ok(())
}

fn add_exclusion(blocklist: &mut Blocklist, extra: &ExtraBlocklistEntry) -> Result<()> {
    let uuid = CanonicalUuid::parse(&extra.uuid)
        .with_context(|| format!("Invalid blocklist UUID {:?}", extra.uuid))?;
    let exclusion: Exclusion = extra.exclusion.parse().map_err(anyhow::Error::msg)?;
    if let Some(previous) = blocklist.insert(uuid, exclusion) {
        debug!(%uuid, %previous, %exclusion, "Blocklist extra replaced standard entry");
    }
    Ok(())
}
