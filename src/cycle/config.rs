//! Cycle set configuration
//!
//! Parses `cycles.toml` into the season set and year range used for label
//! generation. Every field has a built-in default, so a missing file or an
//! empty document both resolve to the standard W/S seasons over years 15-20.

use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cycle::labels::{cycles_for, DEFAULT_SEASONS, DEFAULT_YEARS};

/// Season set and year range parsed from cycles.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CyclesConfig {
    /// Season codes, in the order they appear within each year
    #[serde(default = "default_seasons")]
    pub seasons: Vec<String>,
    /// First reporting year, inclusive
    #[serde(default = "default_first_year")]
    pub first_year: i32,
    /// Last reporting year, inclusive
    #[serde(default = "default_last_year")]
    pub last_year: i32,
}

fn default_seasons() -> Vec<String> {
    DEFAULT_SEASONS.iter().map(ToString::to_string).collect()
}

fn default_first_year() -> i32 {
    *DEFAULT_YEARS.start()
}

fn default_last_year() -> i32 {
    *DEFAULT_YEARS.end()
}

impl Default for CyclesConfig {
    fn default() -> Self {
        Self {
            seasons: default_seasons(),
            first_year: default_first_year(),
            last_year: default_last_year(),
        }
    }
}

impl CyclesConfig {
    /// Parse a cycles.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse cycles.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse cycles.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// The year range covered by this configuration
    #[must_use]
    pub const fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    /// Generate the configured label sequence
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        cycles_for(&self.seasons, self.years())
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        // Check for empty and duplicate season codes
        let mut seen = HashSet::new();
        for season in &self.seasons {
            if season.trim().is_empty() {
                bail!("Season code cannot be empty");
            }
            if !seen.insert(season) {
                bail!("Duplicate season code: '{season}'");
            }
        }

        if self.last_year < self.first_year {
            bail!(
                "Invalid year range: last_year {} is before first_year {}",
                self.last_year,
                self.first_year
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CONFIG: &str = r#"
seasons = ["W", "S", "F"]
first_year = 18
last_year = 22
"#;

    #[test]
    fn test_parse_valid_config() {
        let config = CyclesConfig::parse(VALID_CONFIG).unwrap();

        assert_eq!(config.seasons, vec!["W", "S", "F"]);
        assert_eq!(config.first_year, 18);
        assert_eq!(config.last_year, 22);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CyclesConfig::parse("").unwrap();

        assert_eq!(config.seasons, vec!["W", "S"]);
        assert_eq!(config.first_year, 15);
        assert_eq!(config.last_year, 20);
    }

    #[test]
    fn test_partial_document_fills_in_defaults() {
        let config = CyclesConfig::parse("first_year = 16").unwrap();

        assert_eq!(config.seasons, vec!["W", "S"]);
        assert_eq!(config.first_year, 16);
        assert_eq!(config.last_year, 20);
    }

    #[test]
    fn test_default_matches_empty_parse() {
        assert_eq!(CyclesConfig::default(), CyclesConfig::parse("").unwrap());
    }

    #[test]
    fn test_years_covers_inclusive_range() {
        let config = CyclesConfig::parse(VALID_CONFIG).unwrap();
        let years: Vec<i32> = config.years().collect();
        assert_eq!(years, vec![18, 19, 20, 21, 22]);
    }

    #[test]
    fn test_labels_uses_configured_values() {
        let config = CyclesConfig::parse(
            r#"
seasons = ["W", "S"]
first_year = 15
last_year = 16
"#,
        )
        .unwrap();

        assert_eq!(config.labels(), vec!["W15", "S15", "W16", "S16"]);
    }

    #[test]
    fn test_reject_empty_season_code() {
        let err = CyclesConfig::parse(r#"seasons = ["W", ""]"#).unwrap_err();
        assert!(
            err.to_string().contains("cannot be empty"),
            "Expected 'cannot be empty' error, got: {err}"
        );
    }

    #[test]
    fn test_reject_whitespace_season_code() {
        let err = CyclesConfig::parse(r#"seasons = ["  "]"#).unwrap_err();
        assert!(
            err.to_string().contains("cannot be empty"),
            "Expected 'cannot be empty' error, got: {err}"
        );
    }

    #[test]
    fn test_reject_duplicate_season_codes() {
        let err = CyclesConfig::parse(r#"seasons = ["W", "S", "W"]"#).unwrap_err();
        assert!(
            err.to_string().contains("Duplicate season code"),
            "Expected 'Duplicate season code' error, got: {err}"
        );
    }

    #[test]
    fn test_reject_reversed_year_range() {
        let toml = r"
first_year = 20
last_year = 15
";
        let err = CyclesConfig::parse(toml).unwrap_err();
        assert!(
            err.to_string().contains("Invalid year range"),
            "Expected 'Invalid year range' error, got: {err}"
        );
    }

    #[test]
    fn test_single_year_range_is_valid() {
        let toml = r"
first_year = 15
last_year = 15
";
        let config = CyclesConfig::parse(toml).unwrap();
        assert_eq!(config.labels(), vec!["W15", "S15"]);
    }

    #[test]
    fn test_reject_invalid_toml() {
        let err = CyclesConfig::parse("not valid toml {{{").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = CyclesConfig::from_path("/nonexistent/cycles.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_from_path_valid_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cycles.toml");
        std::fs::write(&config_path, VALID_CONFIG).unwrap();

        let config = CyclesConfig::from_path(&config_path).unwrap();
        assert_eq!(config.seasons.len(), 3);
    }
}
