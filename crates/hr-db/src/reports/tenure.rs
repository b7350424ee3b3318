//! Tenure ladder.

use hr_core::enums::Department;
use hr_core::reports::TenureRecord;

use crate::error::DatabaseError;
use crate::helpers::{get_date, get_f64, get_opt_string, parse_optional_date, round2};
use crate::service::ReportService;

impl ReportService {
    /// Tenure in years for every employee of `department` who had joined by
    /// the evaluation date, measured to their exit or the evaluation date.
    ///
    /// Rows come back in employee id order; ranking by tenure is left to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a stored date is malformed.
    pub async fn tenure_ladder(
        &self,
        department: Department,
    ) -> Result<Vec<TenureRecord>, DatabaseError> {
        let today = self.today();
        let mut rows = self
            .db()
            .query_with(
                "SELECT e.emp_id, e.name, e.join_date, e.exit_date,
                        (julianday(COALESCE(e.exit_date, ?2)) - julianday(e.join_date)) / 365.0
                 FROM employees e
                 JOIN departments d ON e.department_id = d.dept_id
                 WHERE d.name = ?1
                   AND e.join_date IS NOT NULL
                   AND julianday(e.join_date) <= julianday(?2)
                 ORDER BY e.emp_id",
                || libsql::params![department.as_str(), today.as_str()],
            )
            .await?;

        let mut ladder = Vec::new();
        while let Some(row) = rows.next().await? {
            ladder.push(TenureRecord {
                employee_id: row.get::<i64>(0)?,
                name: row.get::<String>(1)?,
                join_date: get_date(&row, 2)?,
                exit_date: parse_optional_date(get_opt_string(&row, 3)?.as_deref())?,
                tenure_years: round2(get_f64(&row, 4)?).max(0.0),
            });
        }
        Ok(ladder)
    }
}
