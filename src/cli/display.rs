//! Rich CLI display for cycle commands
//!
//! Renders results as human-readable terminal output. Decorations go to
//! stderr so stdout remains clean for piping.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;

use crate::cycle::labels::CycleLabel;

/// Output format for results printed to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    Plain,
    /// A single JSON document
    Json,
}

/// Display handler for cycle command output
pub struct LabelDisplay {
    format: OutputFormat,
}

impl LabelDisplay {
    /// Create a new display handler for the given output format
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a decorated header to stderr. Suppressed in JSON mode.
    pub fn print_header(&self, title: &str) {
        if self.format == OutputFormat::Json {
            return;
        }
        eprintln!("\n{} {}", "===".bold().cyan(), title.bold().cyan());
        eprintln!("{}", "─".repeat(50).dimmed());
    }

    /// Write the label sequence to stdout.
    pub fn render_labels(&self, labels: &[String]) -> Result<()> {
        match self.format {
            OutputFormat::Plain => {
                for label in labels {
                    println!("{label}");
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(labels)?);
            }
        }
        Ok(())
    }

    /// Write a single label to stdout.
    pub fn render_label(&self, label: &str) -> Result<()> {
        match self.format {
            OutputFormat::Plain => println!("{label}"),
            OutputFormat::Json => println!("{}", serde_json::to_string(label)?),
        }
        Ok(())
    }

    /// Write a parsed label's components to stdout.
    pub fn render_parsed(&self, parsed: &CycleLabel) -> Result<()> {
        match self.format {
            OutputFormat::Plain => {
                println!("season: {}", parsed.season);
                println!("year: {}", parsed.year);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(parsed)?);
            }
        }
        Ok(())
    }

    /// Print a count summary to stderr. Suppressed in JSON mode.
    pub fn print_summary(&self, count: usize) {
        if self.format == OutputFormat::Json {
            return;
        }
        eprintln!("{}", "─".repeat(50).dimmed());
        eprintln!("  {} {count} label(s)", "Total:".dimmed());
    }
}
