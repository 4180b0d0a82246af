//! GATT fixture tool
//!
//! Usage:
//!   fixture-tool resolve battery_level
//!   fixture-tool resolve 0x2a03 --kind characteristic
//!   fixture-tool catalog characteristicWriteValue --json
//!   fixture-tool --config config/fixtures.toml --environment ci validate

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use fixture_config::{defaults, load_config, FixtureConfig};
use fixture_tool::{
    catalog_command, check_uuid_command, expand_command, judge_command, list_command,
    resolve_command, validate_command, FixtureContext, Listing,
};
use gatt_catalog::Verdict;
use gatt_types::AttributeKind;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fixture-tool")]
#[command(about = "GATT identifier registry and Web Bluetooth conformance catalog")]
#[command(version)]
struct Args {
    /// Path to configuration file (defaults to config/fixtures.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Environment overlay (config/environments/<name>.toml)
    #[arg(short, long, global = true)]
    environment: Option<String>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable JSON logging format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve an alias (0x-prefixed), name or UUID to its canonical record
    Resolve {
        identifier: String,
        /// Only match records of this kind
        #[arg(short, long)]
        kind: Option<AttributeKind>,
        #[arg(long)]
        json: bool,
    },
    /// Expand a hexadecimal alias into the Bluetooth base UUID
    Expand {
        alias: String,
        /// Keep the low 32 bits of wider aliases instead of failing
        #[arg(long)]
        wrapping: bool,
    },
    /// Check UUID syntax
    CheckUuid { uuid: String },
    /// Print a category's scenarios with their expected outcomes
    Catalog {
        category: String,
        #[arg(long)]
        json: bool,
    },
    /// Validate every catalog against the registry and blocklist
    Validate {
        #[arg(long)]
        json: bool,
        /// Report file, overriding [report] path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Judge an observed outcome for one scenario
    Judge {
        category: String,
        ordinal: usize,
        /// disconnect, success, or a reject reason such as not-found
        observed: String,
    },
    /// List registry records, blocklist entries, categories or adapters
    List {
        #[arg(value_enum)]
        what: Listing,
    },
    /// Print the effective configuration as TOML
    PrintConfig,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config_logged(&args, std::io::stderr)?;
    init_logging(&args, &config)?;
    debug!("Configuration: {:?}", config);

    if let Err(e) = run(args, &config) {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

fn run(args: Args, config: &FixtureConfig) -> Result<()> {
    if let Command::PrintConfig = args.command {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let ctx = FixtureContext::from_config(config)?;

    match args.command {
        Command::Resolve {
            identifier,
            kind,
            json,
        } => println!("{}", resolve_command(&ctx, &identifier, kind, json)?.trim_end()),
        Command::Expand { alias, wrapping } => print!("{}", expand_command(&alias, wrapping)?),
        Command::CheckUuid { uuid } => print!("{}", check_uuid_command(&uuid)?),
        Command::Catalog { category, json } => {
            println!("{}", catalog_command(&ctx, &category, json)?.trim_end())
        }
        Command::Validate { json, output } => {
            let report_path = output.or_else(|| config.report.path.as_ref().map(PathBuf::from));
            let result = validate_command(&ctx, json, report_path.as_deref())?;
            println!("{}", result.rendered.trim_end());
            if !result.is_clean() {
                std::process::exit(1);
            }
        }
        Command::Judge {
            category,
            ordinal,
            observed,
        } => {
            let (verdict, rendered) = judge_command(&ctx, &category, ordinal, &observed)?;
            print!("{}", rendered);
            if verdict == Verdict::Fail {
                std::process::exit(1);
            }
        }
        Command::List { what } => print!("{}", list_command(&ctx, what)?),
        Command::PrintConfig => {}
    }

    info!("Done");
    Ok(())
}

/// Load configuration under a scoped subscriber built from the flags alone,
/// so overlay warnings are visible before the configured logging exists
fn load_config_logged<W>(args: &Args, writer: W) -> Result<FixtureConfig>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let level = args.log_level.as_deref().unwrap_or(defaults::logging::LEVEL);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(level))
        .with_writer(writer);
    let load = || load_config(args.config.as_deref(), args.environment.as_deref());

    if args.json_logs {
        tracing::subscriber::with_default(builder.json().finish(), load)
    } else {
        tracing::subscriber::with_default(builder.finish(), load)
    }
}

/// RUST_LOG wins over both the flag and the config file
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_lowercase()))
}

fn init_logging(args: &Args, config: &FixtureConfig) -> Result<()> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_str());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(level))
        .with_writer(std::io::stderr);

    let installed = if args.json_logs || config.logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_missing_overlay_warning_is_logged() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("fixtures.toml");
        fs::write(&config_path, "[logging]\nlevel = \"error\"\n").unwrap();

        let args = Args::try_parse_from([
            "fixture-tool",
            "--config",
            config_path.to_str().unwrap(),
            "--environment",
            "staging",
            "list",
            "categories",
        ])
        .unwrap();

        let captured = Captured::default();
        let sink = captured.clone();
        let config = load_config_logged(&args, move || sink.clone()).unwrap();
        assert_eq!(config.logging.level, "error");

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Environment config not found"), "{}", output);
    }
}
