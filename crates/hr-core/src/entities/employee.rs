use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An employee. `exit_date`, when present, is never before `join_date`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Employee {
    pub emp_id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub department_id: Option<i64>,
    pub join_date: NaiveDate,
    pub exit_date: Option<NaiveDate>,
}

impl Employee {
    /// Whether the employee still counts towards headcount on `as_of`:
    /// no exit date, or an exit date strictly after `as_of`.
    #[must_use]
    pub fn is_active_on(&self, as_of: NaiveDate) -> bool {
        self.exit_date.is_none_or(|exit| exit > as_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(exit: Option<NaiveDate>) -> Employee {
        Employee {
            emp_id: 1,
            name: "Alice".into(),
            age: Some(30),
            gender: Some("F".into()),
            department_id: Some(2),
            join_date: NaiveDate::from_ymd_opt(2015, 3, 1).unwrap(),
            exit_date: exit,
        }
    }

    #[test]
    fn active_without_exit() {
        let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(employee(None).is_active_on(as_of));
    }

    #[test]
    fn exit_on_evaluation_day_is_inactive() {
        let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(!employee(Some(as_of)).is_active_on(as_of));
        assert!(employee(as_of.succ_opt()).is_active_on(as_of));
    }
}
