//! Presentation helpers.
//!
//! Malformed input never fails here; it degrades to a marker string so a
//! renderer can always produce a cell.

use chrono::NaiveDate;

/// Marker shown in place of a date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Marker shown in place of a number that cannot be formatted.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format an ISO `YYYY-MM-DD` date as `Month DD, YYYY`.
#[must_use]
pub fn format_date(date_str: &str) -> String {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_or_else(
        |_| INVALID_DATE.to_string(),
        |date| date.format("%B %d, %Y").to_string(),
    )
}

/// Format the integer part of `number` with thousands separators.
#[must_use]
pub fn format_number(number: f64) -> String {
    if !number.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    #[allow(clippy::cast_possible_truncation)]
    let whole = number.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
