//! Row parsing helpers.
//!
//! Dates are stored as ISO `YYYY-MM-DD` TEXT. Aggregates come back from
//! `SQLite` as either INTEGER or REAL depending on the inputs, so numeric
//! reads go through [`get_f64`].

use chrono::NaiveDate;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `NaiveDate`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<NaiveDate>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.trim().is_empty() => Ok(Some(parse_date(s)?)),
        _ => Ok(None),
    }
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a required date column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column is NULL or not a valid date.
pub fn get_date(row: &libsql::Row, idx: i32) -> Result<NaiveDate, DatabaseError> {
    let raw: String = row.get(idx)?;
    parse_date(&raw)
}

/// Read a numeric column as `f64`, accepting INTEGER or REAL storage.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for NULL, TEXT or BLOB values.
#[allow(clippy::cast_precision_loss)]
pub fn get_f64(row: &libsql::Row, idx: i32) -> Result<f64, DatabaseError> {
    match row.get_value(idx)? {
        libsql::Value::Real(v) => Ok(v),
        libsql::Value::Integer(v) => Ok(v as f64),
        other => Err(DatabaseError::Query(format!(
            "expected a number in column {idx}, got {other:?}"
        ))),
    }
}

/// Round to two decimal places, as report values are presented.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
