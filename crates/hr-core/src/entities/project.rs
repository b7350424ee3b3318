use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A project and its planned date interval (`start_date <= end_date`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub project_id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Project {
    /// Strict interval overlap: intervals that merely touch do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_date < other.end_date && other.start_date < self.end_date
    }
}

/// Hours an employee logged against a project on one day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmployeeProjectLog {
    pub emp_id: i64,
    pub project_id: i64,
    pub hours_logged: i64,
    pub log_date: NaiveDate,
}
