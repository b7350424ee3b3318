//! Employee/project timelines.

use hr_core::enums::Department;
use hr_core::reports::ProjectTimelineRow;

use crate::error::DatabaseError;
use crate::helpers::get_date;
use crate::service::ReportService;

impl ReportService {
    /// One row per time log by an employee of `department`, carrying the
    /// project's planned interval. Logs are not aggregated.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a stored date is malformed.
    pub async fn project_timelines(
        &self,
        department: Department,
    ) -> Result<Vec<ProjectTimelineRow>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                "SELECT e.name, p.name, ep.hours_logged, p.start_date, p.end_date, ep.log_date
                 FROM employee_projects ep
                 JOIN employees e ON ep.emp_id = e.emp_id
                 JOIN departments d ON e.department_id = d.dept_id
                 JOIN projects p ON ep.project_id = p.project_id
                 WHERE d.name = ?1
                 ORDER BY e.name, p.start_date, ep.log_date, p.project_id",
                || libsql::params![department.as_str()],
            )
            .await?;

        let mut timeline = Vec::new();
        while let Some(row) = rows.next().await? {
            timeline.push(ProjectTimelineRow {
                employee_name: row.get::<String>(0)?,
                project_name: row.get::<String>(1)?,
                hours_logged: row.get::<i64>(2)?,
                project_start: get_date(&row, 3)?,
                project_end: get_date(&row, 4)?,
                log_date: get_date(&row, 5)?,
            });
        }
        Ok(timeline)
    }
}
