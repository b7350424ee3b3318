use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single performance review. Append-only; an employee may have many.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PerformanceReview {
    pub emp_id: i64,
    pub review_date: NaiveDate,
    /// Score in 1..=10.
    pub score: i64,
    pub reviewer_id: Option<i64>,
}
