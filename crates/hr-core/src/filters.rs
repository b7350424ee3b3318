//! Filter values accepted by the report layer.
//!
//! Each optional filter is modelled explicitly. Defaults live here as named
//! constructors (`DateRange::performance_default`, `ScoreThreshold::DEFAULT`)
//! rather than being inferred from absent values.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// Inclusive calendar date range, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the range is inverted.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::Validation(format!(
                "date range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Range used by performance trends when no range is supplied:
    /// 2010-01-01 through 2025-12-31.
    #[must_use]
    pub fn performance_default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the range (both ends inclusive).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// ISO-formatted bounds, as bound into SQL parameters.
    #[must_use]
    pub fn to_sql_bounds(&self) -> (String, String) {
        (self.start.to_string(), self.end.to_string())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// YearMonth
// ---------------------------------------------------------------------------

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `month` is outside 1..=12 or the
    /// year is out of range.
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| CoreError::Validation(format!("invalid month {year}-{month:02}")))
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last calendar day of the month (28th–31st).
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(self.first_day)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::Validation(format!("expected YYYY-MM, got '{s}'"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// MonthRange
// ---------------------------------------------------------------------------

/// Month-granular range as picked by an analyst (`start <= end`).
///
/// Expands to a [`DateRange`] from the first day of `start` to the last day
/// of `end`, so short months need no special casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthRange {
    start: YearMonth,
    end: YearMonth,
}

impl MonthRange {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `start` is after `end`.
    pub fn new(start: YearMonth, end: YearMonth) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::Validation(format!(
                "month range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> YearMonth {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> YearMonth {
        self.end
    }

    #[must_use]
    pub fn to_date_range(&self) -> DateRange {
        DateRange {
            start: self.start.first_day(),
            end: self.end.last_day(),
        }
    }

    /// `YYYY-MM_YYYY-MM`, used in export file names.
    #[must_use]
    pub fn file_label(&self) -> String {
        format!("{}_{}", self.start, self.end)
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// ScoreThreshold
// ---------------------------------------------------------------------------

/// Minimum performance score (inclusive), 0–10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ScoreThreshold(u8);

impl ScoreThreshold {
    pub const MAX: u8 = 10;

    /// Threshold applied when the caller does not pick one.
    pub const DEFAULT: Self = Self(5);

    /// Accepts every review.
    pub const NONE: Self = Self(0);

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `value > 10`.
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::Validation(format!(
                "score threshold must be between 0 and {}, got {value}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for ScoreThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for ScoreThreshold {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScoreThreshold> for u8 {
    fn from(value: ScoreThreshold) -> Self {
        value.0
    }
}

impl FromStr for ScoreThreshold {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| CoreError::Validation(format!("invalid score threshold '{s}'")))?;
        Self::new(value)
    }
}

impl fmt::Display for ScoreThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
