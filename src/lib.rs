//! Cycles - Reporting cycle label toolkit
//!
//! Generates season + two-digit-year labels ("W15", "S15", ...) used to tag
//! reporting artifacts, splits existing labels back into their components,
//! and resolves the cycle covering a given date.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod cycle;

// Re-export commonly used types
pub use cli::{LabelDisplay, OutputFormat};
pub use cycle::config::CyclesConfig;
pub use cycle::labels::{
    cycle_for_date, cycles, cycles_for, CycleLabel, DEFAULT_SEASONS, DEFAULT_YEARS,
};
