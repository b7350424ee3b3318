//! Report defaults: threshold, month range, evaluation date.

use chrono::NaiveDate;
use hr_core::filters::{MonthRange, ScoreThreshold, YearMonth};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_threshold() -> u8 {
    ScoreThreshold::DEFAULT.value()
}

fn default_from() -> String {
    "2015-01".to_string()
}

fn default_to() -> String {
    "2025-12".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Minimum score applied to performance trends when none is given (0–10).
    #[serde(default = "default_threshold")]
    pub default_threshold: u8,

    /// First month (`YYYY-MM`) of the range used when none is given.
    #[serde(default = "default_from")]
    pub default_from: String,

    /// Last month (`YYYY-MM`) of the range used when none is given.
    #[serde(default = "default_to")]
    pub default_to: String,

    /// Pin the evaluation date (`YYYY-MM-DD`). Empty means today.
    #[serde(default)]
    pub as_of: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
            default_from: default_from(),
            default_to: default_to(),
            as_of: String::new(),
        }
    }
}

impl ReportConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `default_threshold` exceeds 10.
    pub fn threshold(&self) -> Result<ScoreThreshold, ConfigError> {
        ScoreThreshold::new(self.default_threshold).map_err(|e| ConfigError::InvalidValue {
            field: "report.default_threshold".into(),
            reason: e.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if either bound is not `YYYY-MM`
    /// or the range is inverted.
    pub fn default_months(&self) -> Result<MonthRange, ConfigError> {
        let parse = |field: &str, value: &str| {
            value
                .parse::<YearMonth>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: field.into(),
                    reason: e.to_string(),
                })
        };
        let start = parse("report.default_from", &self.default_from)?;
        let end = parse("report.default_to", &self.default_to)?;
        MonthRange::new(start, end).map_err(|e| ConfigError::InvalidValue {
            field: "report.default_to".into(),
            reason: e.to_string(),
        })
    }

    /// Pinned evaluation date, or `None` to evaluate against today.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `as_of` is set but not `YYYY-MM-DD`.
    pub fn as_of_date(&self) -> Result<Option<NaiveDate>, ConfigError> {
        let raw = self.as_of.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: "report.as_of".into(),
                reason: format!("expected YYYY-MM-DD, got '{raw}': {e}"),
            })
    }

    /// Check every field parses.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.threshold()?;
        self.default_months()?;
        self.as_of_date()?;
        Ok(())
    }
}
