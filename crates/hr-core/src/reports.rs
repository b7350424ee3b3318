//! Row types produced by the report query engine.
//!
//! None of these are persisted. Field order matches the column order of the
//! tabular result the dispatcher builds from them.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A performance review annotated with its 1-based position in the
/// employee's review history (by review date, within the filtered set).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RankedReview {
    pub employee_id: i64,
    pub employee_name: String,
    pub review_date: NaiveDate,
    pub score: i64,
    pub rank: i64,
}

/// Mean review score across a department.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DepartmentScore {
    pub department: String,
    pub average_score: f64,
}

/// Number of exits in one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttritionMonth {
    pub year_month: String,
    pub exits: i64,
}

/// Department load on one log date.
///
/// `current_headcount` is evaluated once per query and repeated on every row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LoadSample {
    pub department: String,
    pub current_headcount: i64,
    pub log_date: NaiveDate,
    pub avg_hours_logged_per_employee: f64,
}

/// Two distinct projects an employee logged time on whose intervals overlap.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OverlapPair {
    pub employee_id: i64,
    pub employee_name: String,
    pub project1: String,
    pub project2: String,
}

/// Tenure in years, rounded to two decimals and never negative.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TenureRecord {
    pub employee_id: i64,
    pub name: String,
    pub join_date: NaiveDate,
    pub exit_date: Option<NaiveDate>,
    pub tenure_years: f64,
}

/// One time-log edge between an employee and a project, with the
/// project's planned interval.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectTimelineRow {
    pub employee_name: String,
    pub project_name: String,
    pub hours_logged: i64,
    pub project_start: NaiveDate,
    pub project_end: NaiveDate,
    pub log_date: NaiveDate,
}
