//! Concurrent project assignments.

use hr_core::enums::Department;
use hr_core::reports::OverlapPair;

use crate::error::DatabaseError;
use crate::service::ReportService;

impl ReportService {
    /// Pairs of distinct projects an employee of `department` logged time on
    /// whose planned intervals overlap (`p1.start < p2.end AND p2.start < p1.end`).
    ///
    /// Each unordered pair appears once per employee, with `project1` the
    /// lower project id. Projects that only touch at a boundary do not overlap.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn project_overlap(
        &self,
        department: Department,
    ) -> Result<Vec<OverlapPair>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                "WITH worked_on AS (
                     SELECT DISTINCT ep.emp_id, ep.project_id
                     FROM employee_projects ep
                     JOIN employees e ON ep.emp_id = e.emp_id
                     JOIN departments d ON e.department_id = d.dept_id
                     WHERE d.name = ?1
                 )
                 SELECT e.emp_id, e.name, p1.name, p2.name
                 FROM worked_on w1
                 JOIN worked_on w2
                   ON w1.emp_id = w2.emp_id AND w1.project_id < w2.project_id
                 JOIN projects p1 ON w1.project_id = p1.project_id
                 JOIN projects p2 ON w2.project_id = p2.project_id
                 JOIN employees e ON w1.emp_id = e.emp_id
                 WHERE p1.start_date < p2.end_date
                   AND p2.start_date < p1.end_date
                 ORDER BY e.name, p1.name, p2.name, e.emp_id",
                || libsql::params![department.as_str()],
            )
            .await?;

        let mut pairs = Vec::new();
        while let Some(row) = rows.next().await? {
            pairs.push(OverlapPair {
                employee_id: row.get::<i64>(0)?,
                employee_name: row.get::<String>(1)?,
                project1: row.get::<String>(2)?,
                project2: row.get::<String>(3)?,
            });
        }
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use hr_core::entities::{Employee, EmployeeProjectLog, Project};
    use hr_core::enums::Department;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::ReportDb;
    use crate::seed::{Dataset, standard_departments};
    use crate::service::{AsOf, ReportService};
    use crate::test_support::helpers::{ENGINEERING, as_of, date, fixture_service};

    #[tokio::test]
    async fn fixture_pairs_are_canonical_and_strict() {
        let svc = fixture_service().await;
        let rows = svc.project_overlap(Department::Engineering).await.unwrap();
        let pairs: Vec<_> = rows
            .iter()
            .map(|r| (r.employee_name.as_str(), r.project1.as_str(), r.project2.as_str()))
            .collect();
        // Apollo/Cygnus only touch on Jan 20; Ben worked on exactly that pair.
        assert_eq!(
            pairs,
            vec![("Ann", "Apollo", "Borealis"), ("Ann", "Borealis", "Cygnus")]
        );
        assert!(rows.iter().all(|r| r.project1 != r.project2));
    }

    /// Single employee logging on two projects with the given day-of-month
    /// intervals in January 2021.
    async fn two_project_service(a: (u32, u32), b: (u32, u32)) -> ReportService {
        let day = |d: u32| date(&format!("2021-01-{d:02}"));
        let dataset = Dataset {
            departments: standard_departments(),
            employees: vec![Employee {
                emp_id: 1,
                name: "Ann".into(),
                age: None,
                gender: None,
                department_id: Some(ENGINEERING),
                join_date: date("2020-01-01"),
                exit_date: None,
            }],
            reviews: Vec::new(),
            projects: vec![
                Project {
                    project_id: 1,
                    name: "A".into(),
                    start_date: day(a.0),
                    end_date: day(a.1),
                },
                Project {
                    project_id: 2,
                    name: "B".into(),
                    start_date: day(b.0),
                    end_date: day(b.1),
                },
            ],
            logs: vec![
                EmployeeProjectLog {
                    emp_id: 1,
                    project_id: 1,
                    hours_logged: 1,
                    log_date: day(a.0),
                },
                EmployeeProjectLog {
                    emp_id: 1,
                    project_id: 2,
                    hours_logged: 1,
                    log_date: day(b.0),
                },
            ],
        };
        let db = ReportDb::open_local(":memory:").await.unwrap();
        db.replace_dataset(&dataset).await.unwrap();
        ReportService::new(db, AsOf::Fixed(as_of()))
    }

    #[rstest]
    #[case((10, 20), (15, 25), true)]
    #[case((15, 25), (10, 20), true)]
    #[case((10, 20), (20, 30), false)]
    #[case((20, 30), (10, 20), false)]
    #[case((10, 30), (12, 14), true)]
    #[case((1, 5), (6, 9), false)]
    #[tokio::test]
    async fn strict_interval_overlap(
        #[case] a: (u32, u32),
        #[case] b: (u32, u32),
        #[case] overlaps: bool,
    ) {
        let svc = two_project_service(a, b).await;
        let rows = svc.project_overlap(Department::Engineering).await.unwrap();
        assert_eq!(rows.len(), usize::from(overlaps));
        if overlaps {
            assert_eq!((rows[0].project1.as_str(), rows[0].project2.as_str()), ("A", "B"));
        }
    }

    #[tokio::test]
    async fn other_departments_see_nothing() {
        let svc = fixture_service().await;
        // Eve (Sales) logged on a single project.
        assert!(svc.project_overlap(Department::Sales).await.unwrap().is_empty());
        assert!(svc.project_overlap(Department::Finance).await.unwrap().is_empty());
    }
}
