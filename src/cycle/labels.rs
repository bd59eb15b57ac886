//! Reporting cycle labels
//!
//! Generates season + two-digit-year labels ("W15", "S15", ...) and splits
//! existing labels back into their components.

use std::fmt;
use std::ops::RangeInclusive;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Season codes used when no custom set is given ("W" = Winter, "S" = Summer)
pub const DEFAULT_SEASONS: [&str; 2] = ["W", "S"];

/// Two-digit reporting years used when no custom range is given (2015-2020)
pub const DEFAULT_YEARS: RangeInclusive<i32> = 15..=20;

/// Generate the default label sequence: W and S seasons over years 15-20.
#[must_use]
pub fn cycles() -> Vec<String> {
    cycles_for(&DEFAULT_SEASONS, DEFAULT_YEARS)
}

/// Generate a label for every (year, season) pair, year-major.
///
/// All season labels for the first year appear before any label of the
/// second year, and so on. The output length is always
/// `seasons.len() * years.len()`; an empty season set or year sequence
/// yields an empty vector. Years are rendered as plain decimal integers
/// with no zero padding.
#[must_use]
pub fn cycles_for<S>(seasons: &[S], years: impl IntoIterator<Item = i32>) -> Vec<String>
where
    S: AsRef<str>,
{
    let mut labels = Vec::new();
    for year in years {
        for season in seasons {
            labels.push(format!("{}{year}", season.as_ref()));
        }
    }
    labels
}

/// The label covering the given calendar date.
///
/// January through June fall in the "W" cycle, July through December in
/// "S". The year component is the calendar year modulo 100.
#[must_use]
pub fn cycle_for_date(date: NaiveDate) -> String {
    let season = if date.month() <= 6 { "W" } else { "S" };
    format!("{season}{}", date.year().rem_euclid(100))
}

/// A reporting cycle label split into its components
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CycleLabel {
    /// Season code, e.g. "W" or "S"
    pub season: String,
    /// Reporting year as it appears in the label
    pub year: i32,
}

impl CycleLabel {
    /// Parse a label like "W15" into its season code and year.
    ///
    /// The season code is the leading run of non-digit characters and the
    /// year is the trailing decimal digits. Both parts are required.
    pub fn parse(label: &str) -> Result<Self> {
        if label.is_empty() {
            bail!("Invalid cycle label '': label cannot be empty");
        }

        let digits_start = match label.find(|c: char| c.is_ascii_digit()) {
            Some(index) => index,
            None => bail!("Invalid cycle label '{label}': missing year digits"),
        };

        if digits_start == 0 {
            bail!("Invalid cycle label '{label}': missing season code");
        }

        let (season, digits) = label.split_at(digits_start);
        let year: i32 = digits
            .parse()
            .with_context(|| format!("Invalid cycle label '{label}': year is not a number"))?;

        Ok(Self {
            season: season.to_string(),
            year,
        })
    }
}

impl fmt::Display for CycleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.season, self.year)
    }
}
