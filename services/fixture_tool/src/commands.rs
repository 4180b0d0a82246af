//! Subcommand implementations
//!
//! Each command renders its output to a `String`; failures that the user
//! caused (bad identifiers, unknown categories) come back as errors.

use crate::context::FixtureContext;
use anyhow::{anyhow, bail, Context, Result};
use gatt_catalog::{
    annotate, validate_catalog, AdapterDataSet, CatalogReport, Outcome, OutcomeLog, RejectReason,
    TestCategory, Verdict,
};
use gatt_types::{expand_alias, expand_alias_wrapping, AttributeKind, CanonicalUuid, Identifier};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse hexadecimal alias text, with or without a `0x` prefix
pub fn parse_alias(text: &str) -> Result<u64> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() {
        bail!("empty alias");
    }
    u64::from_str_radix(digits, 16).with_context(|| format!("Invalid alias {:?}", text))
}

/// `0x`-prefixed text is an alias; anything else is classified as UUID or name
pub fn parse_identifier(text: &str) -> Result<Identifier> {
    if text.starts_with("0x") || text.starts_with("0X") {
        Ok(Identifier::alias(parse_alias(text)?))
    } else {
        Ok(Identifier::classify(text))
    }
}

/// Parse an observed outcome: `disconnect`, `success` or a reject reason
/// such as `not-found`, optionally written as `rejected:not-found`
pub fn parse_outcome(text: &str) -> Result<Outcome> {
    let text = text.trim().to_ascii_lowercase();
    match text.as_str() {
        "disconnect" => return Ok(Outcome::Disconnect),
        "success" => return Ok(Outcome::Success),
        _ => {}
    }
    let reason = text.strip_prefix("rejected:").unwrap_or(&text);
    RejectReason::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == reason)
        .map(Outcome::Rejected)
        .ok_or_else(|| {
            anyhow!(
                "unknown outcome {:?}: expected disconnect, success or one of {}",
                text,
                RejectReason::ALL.map(|r| r.as_str()).join(", ")
            )
        })
}

pub fn resolve_command(
    ctx: &FixtureContext,
    text: &str,
    kind: Option<AttributeKind>,
    json: bool,
) -> Result<String> {
    let identifier = parse_identifier(text)?;
    let record = match kind {
        Some(kind) => ctx.registry.resolve_kind(kind, &identifier),
        None => ctx.registry.resolve(&identifier),
    }
    .with_context(|| format!("Failed to resolve {:?}", text))?;

    if json {
        return Ok(serde_json::to_string_pretty(record)?);
    }

    let mut out = format!("{} {}\n", record.kind, record.label());
    if let Some(alias) = record.alias {
        writeln!(out, "  alias: {:#06x}", alias)?;
    }
    if let Some(name) = &record.name {
        writeln!(out, "  name:  {}", name)?;
    }
    if let Some(uuid) = record.uuid {
        writeln!(out, "  uuid:  {}", uuid)?;
        if let Some(exclusion) = ctx.blocklist.exclusion(&uuid) {
            writeln!(out, "  blocklist: {}", exclusion)?;
        }
    }
    Ok(out)
}

/// Expand an alias into the base UUID; aliases wider than 32 bits need `wrapping`
pub fn expand_command(text: &str, wrapping: bool) -> Result<String> {
    let raw = parse_alias(text)?;
    let uuid = match u32::try_from(raw) {
        Ok(alias) => expand_alias(alias),
        Err(_) if wrapping => expand_alias_wrapping(raw),
        Err(_) => bail!(
            "alias {:#x} does not fit in 32 bits (pass --wrapping to keep the low 32 bits)",
            raw
        ),
    };
    Ok(format!("{}\n", uuid))
}

pub fn check_uuid_command(text: &str) -> Result<String> {
    let uuid = CanonicalUuid::parse(text).with_context(|| format!("Invalid UUID {:?}", text))?;
    Ok(format!("valid: {}\n", uuid))
}

pub fn catalog_command(ctx: &FixtureContext, category: &str, json: bool) -> Result<String> {
    let category: TestCategory = category.parse()?;
    let cases = annotate(category, &ctx.oracle());

    if json {
        return Ok(serde_json::to_string_pretty(&cases)?);
    }

    let mut out = String::new();
    for annotated in &cases {
        writeln!(out, "{} -> {}", annotated.case, annotated.expected)?;
    }
    Ok(out)
}

/// Rendered validation result
#[derive(Debug, Clone)]
pub struct ValidateOutput {
    pub rendered: String,
    pub report: CatalogReport,
}

impl ValidateOutput {
    pub fn is_clean(&self) -> bool {
        self.report.is_clean()
    }
}

/// Validate every catalog, optionally writing the JSON report to `report_path`
pub fn validate_command(
    ctx: &FixtureContext,
    json: bool,
    report_path: Option<&Path>,
) -> Result<ValidateOutput> {
    let report = validate_catalog(&ctx.oracle());

    if let Some(path) = report_path {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory {:?}", parent))?;
        }
        fs::write(path, report.to_json()?)
            .with_context(|| format!("Failed to write report {:?}", path))?;
        info!("Wrote catalog report to {:?}", path);
    }

    let rendered = if json {
        report.to_json()?
    } else {
        render_report(&report)?
    };
    Ok(ValidateOutput { rendered, report })
}

fn render_report(report: &CatalogReport) -> Result<String> {
    let mut out = String::new();
    for summary in &report.categories {
        write!(
            out,
            "{:<26} {:>3} scenarios: {} disconnect, {} success",
            summary.category.as_str(),
            summary.total, summary.disconnect, summary.success
        )?;
        for (reason, count) in &summary.rejected {
            write!(out, ", {} {}", count, reason)?;
        }
        if summary.unspecified_disconnect > 0 {
            write!(out, " ({} without disconnect expectation)", summary.unspecified_disconnect)?;
        }
        out.push('\n');
    }
    for violation in &report.violations {
        writeln!(out, "{}", violation)?;
    }
    if report.is_clean() {
        writeln!(out, "Catalog clean: {} scenarios", report.total_cases())?;
    } else {
        writeln!(out, "{} violation(s)", report.violations.len())?;
    }
    Ok(out)
}

/// Judge one observed outcome; the verdict is returned with the rendered log
pub fn judge_command(
    ctx: &FixtureContext,
    category: &str,
    ordinal: usize,
    observed: &str,
) -> Result<(Verdict, String)> {
    let category: TestCategory = category.parse()?;
    let observed = parse_outcome(observed)?;
    let mut log = OutcomeLog::new();
    let verdict = log.record(&ctx.oracle(), category, ordinal, observed)?;
    Ok((verdict, log.render()))
}

/// What `list` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Listing {
    Services,
    Characteristics,
    Descriptors,
    Blocklist,
    Categories,
    Adapters,
}

pub fn list_command(ctx: &FixtureContext, listing: Listing) -> Result<String> {
    let mut out = String::new();
    match listing {
        Listing::Services => list_records(ctx, AttributeKind::Service, &mut out)?,
        Listing::Characteristics => list_records(ctx, AttributeKind::Characteristic, &mut out)?,
        Listing::Descriptors => list_records(ctx, AttributeKind::Descriptor, &mut out)?,
        Listing::Blocklist => {
            for (uuid, exclusion) in ctx.blocklist.iter() {
                let label = ctx
                    .registry
                    .resolve_uuid(uuid)
                    .and_then(|record| record.name.as_deref())
                    .unwrap_or("");
                writeln!(out, "{}  {:<14}  {}", uuid, exclusion.as_str(), label)?;
            }
        }
        Listing::Categories => {
            for category in TestCategory::ALL {
                writeln!(
                    out,
                    "{:<26} {}",
                    category.as_str(),
                    gatt_catalog::catalog(category).len()
                )?;
            }
        }
        Listing::Adapters => {
            for adapter in AdapterDataSet::ALL {
                let devices = if adapter.has_devices() { "devices" } else { "no devices" };
                writeln!(out, "{:<40} {}", adapter.as_str(), devices)?;
            }
        }
    }
    Ok(out)
}

fn list_records(ctx: &FixtureContext, kind: AttributeKind, out: &mut String) -> Result<()> {
    for record in ctx.registry.records_of(kind) {
        let uuid = record.uuid.map(|u| u.to_string()).unwrap_or_default();
        writeln!(out, "{:<36}  {}", uuid, record.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alias_forms() {
        assert_eq!(parse_alias("0x2a19").unwrap(), 0x2a19);
        assert_eq!(parse_alias("2A19").unwrap(), 0x2a19);
        assert_eq!(parse_alias("0xADEADBEEF").unwrap(), 0xadeadbeef);
        assert!(parse_alias("0x").is_err());
        assert!(parse_alias("battery").is_err());
    }

    #[test]
    fn test_parse_identifier_dispatch() {
        assert_eq!(parse_identifier("0x2a19").unwrap(), Identifier::alias(0x2a19));
        assert_eq!(
            parse_identifier("battery_level").unwrap(),
            Identifier::name("battery_level")
        );
        assert_eq!(parse_identifier("11").unwrap(), Identifier::uuid("11"));
    }

    #[test]
    fn test_parse_outcome() {
        assert_eq!(parse_outcome("Disconnect").unwrap(), Outcome::Disconnect);
        assert_eq!(parse_outcome("success").unwrap(), Outcome::Success);
        assert_eq!(
            parse_outcome("blocklisted").unwrap(),
            Outcome::Rejected(RejectReason::Blocklisted)
        );
        assert_eq!(
            parse_outcome("rejected:payload-too-large").unwrap(),
            Outcome::Rejected(RejectReason::PayloadTooLarge)
        );
        assert!(parse_outcome("rejected").is_err());
    }

    #[test]
    fn test_expand_requires_wrapping_for_wide_aliases() {
        assert_eq!(
            expand_command("0x2a19", false).unwrap(),
            "00002a19-0000-1000-8000-00805f9b34fb\n"
        );
        assert!(expand_command("0xADEADBEEF", false).is_err());
        assert_eq!(
            expand_command("0xADEADBEEF", true).unwrap(),
            "deadbeef-0000-1000-8000-00805f9b34fb\n"
        );
    }

    #[test]
    fn test_check_uuid() {
        assert_eq!(
            check_uuid_command("00002A19-0000-1000-8000-00805F9B34FB").unwrap(),
            "valid: 00002a19-0000-1000-8000-00805f9b34fb\n"
        );
        assert!(check_uuid_command("1234567891000-1000-8000-00805f9b34fb").is_err());
    }
}
