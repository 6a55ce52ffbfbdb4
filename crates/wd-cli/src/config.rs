//! Report configuration loading
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. built-in defaults (December 2018 at £344.83 per day)
//! 2. an optional TOML file (`workdays.toml` unless `--config` says otherwise)
//! 3. environment variables prefixed with `WORKDAYS_` (e.g. `WORKDAYS_DAY_RATE`)
//! 4. command-line flags, applied by the caller

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::Result;

/// Settings for one report run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportConfig {
    /// Month to report on (1-12)
    #[serde(default = "default_month")]
    pub month: u8,

    /// Year to report on
    #[serde(default = "default_year")]
    pub year: i32,

    /// Rate charged per working day
    #[serde(default = "default_day_rate")]
    pub day_rate: f64,

    /// Currency symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Whether to list the individual days
    #[serde(default = "default_list_days")]
    pub list_days: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            month: default_month(),
            year: default_year(),
            day_rate: default_day_rate(),
            currency: default_currency(),
            list_days: default_list_days(),
        }
    }
}

impl ReportConfig {
    /// Load from `path` (missing file is fine) and `WORKDAYS_*` variables.
    pub fn load(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("WORKDAYS").try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

fn default_month() -> u8 {
    12
}

fn default_year() -> i32 {
    2018
}

fn default_day_rate() -> f64 {
    344.83
}

fn default_currency() -> String {
    "£".to_string()
}

fn default_list_days() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = ReportConfig::load("does-not-exist/workdays").unwrap();
        assert_eq!(cfg.month, 12);
        assert_eq!(cfg.year, 2018);
        assert!(cfg.list_days);
    }
}
