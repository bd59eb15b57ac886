//! Cycles - Reporting cycle label generator
//!
//! CLI entry point for the cycles tool.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};

use cycles::cycle::config::CyclesConfig;
use cycles::cycle::labels::{cycle_for_date, cycles_for, CycleLabel};
use cycles::{LabelDisplay, OutputFormat};

/// Reporting cycle label generator
///
/// Produces season + two-digit-year labels ("W15", "S15", ...) used to tag
/// reporting artifacts.
#[derive(Parser, Debug)]
#[command(name = "cycles", version, about)]
struct Cli {
    /// Path to the cycles.toml configuration file
    /// (built-in defaults are used when omitted and no cycles.toml exists)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format for results printed to stdout
    #[arg(long, value_enum, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the label sequence for the configured seasons and years
    List {
        /// Comma-separated season codes, overriding the config
        #[arg(long, value_delimiter = ',')]
        seasons: Option<Vec<String>>,

        /// First reporting year, overriding the config
        #[arg(long)]
        first_year: Option<i32>,

        /// Last reporting year, overriding the config
        #[arg(long)]
        last_year: Option<i32>,
    },
    /// Print the label covering today's date
    Current,
    /// Split a label into its season code and year
    Parse {
        /// The label to split, e.g. "W15"
        label: String,
    },
}

/// Default config path probed when `--config` is not given.
const DEFAULT_CONFIG_PATH: &str = "cycles.toml";

/// Load the cycle configuration.
///
/// An explicitly given path must exist. The default path is optional: when
/// it is absent the built-in seasons and years are used.
fn load_config(path: Option<&Path>) -> Result<CyclesConfig> {
    match path {
        Some(path) => CyclesConfig::from_path(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display())),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                CyclesConfig::from_path(default)
                    .with_context(|| format!("Failed to load config from '{DEFAULT_CONFIG_PATH}'"))
            } else {
                Ok(CyclesConfig::default())
            }
        }
    }
}

/// Apply CLI overrides on top of the configured seasons and year range.
fn resolve_inputs(
    config: CyclesConfig,
    seasons: Option<Vec<String>>,
    first_year: Option<i32>,
    last_year: Option<i32>,
) -> (Vec<String>, RangeInclusive<i32>) {
    let resolved_seasons = seasons.unwrap_or(config.seasons);
    let first = first_year.unwrap_or(config.first_year);
    let last = last_year.unwrap_or(config.last_year);
    (resolved_seasons, first..=last)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let display = LabelDisplay::new(cli.format);

    match cli.command {
        Command::List {
            seasons,
            first_year,
            last_year,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let (seasons, years) = resolve_inputs(config, seasons, first_year, last_year);
            let labels = cycles_for(&seasons, years);

            display.print_header("Reporting cycles");
            display.render_labels(&labels)?;
            display.print_summary(labels.len());
        }
        Command::Current => {
            display.render_label(&cycle_for_date(Utc::now().date_naive()))?;
        }
        Command::Parse { label } => {
            let parsed = CycleLabel::parse(&label)?;
            display.render_parsed(&parsed)?;
        }
    }

    Ok(())
}
