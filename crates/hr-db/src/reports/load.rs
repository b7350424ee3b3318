//! Department load: current headcount alongside daily logged hours.

use hr_core::enums::Department;
use hr_core::filters::DateRange;
use hr_core::reports::LoadSample;

use crate::error::DatabaseError;
use crate::helpers::{get_date, get_f64, round2};
use crate::service::ReportService;

impl ReportService {
    /// Average hours per log entry for each log date in `range`, paired with
    /// the department's headcount at the evaluation date.
    ///
    /// Headcount counts employees with no exit date or an exit strictly after
    /// the evaluation date. It is computed once and repeated on every row.
    /// Log dates with no entries produce no row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a stored date is malformed.
    pub async fn department_load(
        &self,
        department: Department,
        range: DateRange,
    ) -> Result<Vec<LoadSample>, DatabaseError> {
        let (start, end) = range.to_sql_bounds();
        let today = self.today();

        let mut rows = self
            .db()
            .query_with(
                "WITH headcount AS (
                     SELECT COUNT(*) AS n
                     FROM employees e
                     JOIN departments d ON e.department_id = d.dept_id
                     WHERE d.name = ?1
                       AND (e.exit_date IS NULL OR e.exit_date > ?4)
                 ),
                 hours_per_day AS (
                     SELECT ep.log_date, AVG(ep.hours_logged) AS avg_hours
                     FROM employee_projects ep
                     JOIN employees e ON ep.emp_id = e.emp_id
                     JOIN departments d ON e.department_id = d.dept_id
                     WHERE d.name = ?1
                       AND ep.log_date BETWEEN ?2 AND ?3
                     GROUP BY ep.log_date
                 )
                 SELECT ?1, headcount.n, h.log_date, h.avg_hours
                 FROM hours_per_day h
                 CROSS JOIN headcount
                 ORDER BY h.log_date",
                || {
                    libsql::params![
                        department.as_str(),
                        start.as_str(),
                        end.as_str(),
                        today.as_str()
                    ]
                },
            )
            .await?;

        let mut samples = Vec::new();
        while let Some(row) = rows.next().await? {
            samples.push(LoadSample {
                department: row.get::<String>(0)?,
                current_headcount: row.get::<i64>(1)?,
                log_date: get_date(&row, 2)?,
                avg_hours_logged_per_employee: round2(get_f64(&row, 3)?),
            });
        }
        Ok(samples)
    }
}
