//! Shared test fixtures for hr-db tests.
//!
//! A small hand-picked dataset with known answers for every report:
//!
//! - Engineering: Ann (active, three reviews), Ben/Cara/Dan (exited Jan–Feb
//!   2021), Finn (joins 2030), Gus (exits after the evaluation date).
//! - Sales: Eve (exited March 2021). HR: Hana (active). Marketing and Finance
//!   are empty.
//! - Projects Apollo [Jan 10, Jan 20], Borealis [Jan 15, Jan 25] and
//!   Cygnus [Jan 20, Jan 30] of 2021: Apollo overlaps Borealis, Borealis
//!   overlaps Cygnus, Apollo only touches Cygnus.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::NaiveDate;
    use hr_core::entities::{Employee, EmployeeProjectLog, PerformanceReview, Project};

    use crate::ReportDb;
    use crate::seed::{Dataset, standard_departments};
    use crate::service::{AsOf, ReportService};

    pub const ENGINEERING: i64 = 2;
    pub const SALES: i64 = 3;
    pub const HR: i64 = 1;

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Evaluation date used by every fixture service.
    pub fn as_of() -> NaiveDate {
        date("2024-06-30")
    }

    fn employee(emp_id: i64, name: &str, dept: i64, join: &str, exit: Option<&str>) -> Employee {
        Employee {
            emp_id,
            name: name.to_string(),
            age: Some(30),
            gender: Some("F".to_string()),
            department_id: Some(dept),
            join_date: date(join),
            exit_date: exit.map(date),
        }
    }

    fn review(emp_id: i64, on: &str, score: i64) -> PerformanceReview {
        PerformanceReview {
            emp_id,
            review_date: date(on),
            score,
            reviewer_id: Some(1),
        }
    }

    fn project(project_id: i64, name: &str, start: &str, end: &str) -> Project {
        Project {
            project_id,
            name: name.to_string(),
            start_date: date(start),
            end_date: date(end),
        }
    }

    fn log(emp_id: i64, project_id: i64, hours: i64, on: &str) -> EmployeeProjectLog {
        EmployeeProjectLog {
            emp_id,
            project_id,
            hours_logged: hours,
            log_date: date(on),
        }
    }

    pub fn fixture_dataset() -> Dataset {
        Dataset {
            departments: standard_departments(),
            employees: vec![
                employee(1, "Ann", ENGINEERING, "2018-01-10", None),
                employee(2, "Ben", ENGINEERING, "2019-05-01", Some("2021-01-31")),
                employee(3, "Cara", ENGINEERING, "2020-03-01", Some("2021-02-03")),
                employee(4, "Dan", ENGINEERING, "2017-07-01", Some("2021-02-20")),
                employee(5, "Eve", SALES, "2016-01-01", Some("2021-03-10")),
                employee(6, "Finn", ENGINEERING, "2030-01-01", None),
                employee(7, "Gus", ENGINEERING, "2015-01-01", Some("2025-06-01")),
                employee(8, "Hana", HR, "2019-01-01", None),
            ],
            reviews: vec![
                review(1, "2022-01-01", 9),
                review(1, "2021-01-01", 8),
                review(1, "2021-06-01", 4),
                review(2, "2020-06-01", 6),
                review(5, "2021-03-01", 10),
                review(8, "2021-01-01", 3),
            ],
            projects: vec![
                project(1, "Apollo", "2021-01-10", "2021-01-20"),
                project(2, "Borealis", "2021-01-15", "2021-01-25"),
                project(3, "Cygnus", "2021-01-20", "2021-01-30"),
            ],
            logs: vec![
                log(1, 1, 4, "2021-01-12"),
                log(1, 1, 3, "2021-01-13"),
                log(1, 2, 6, "2021-01-16"),
                log(1, 3, 2, "2021-01-22"),
                log(2, 1, 8, "2021-01-12"),
                log(2, 3, 5, "2021-01-22"),
                log(5, 2, 7, "2021-03-01"),
            ],
        }
    }

    /// In-memory store loaded with [`fixture_dataset`], evaluated at [`as_of`].
    pub async fn fixture_service() -> ReportService {
        let db = ReportDb::open_local(":memory:").await.unwrap();
        db.replace_dataset(&fixture_dataset()).await.unwrap();
        ReportService::new(db, AsOf::Fixed(as_of()))
    }

    /// In-memory store with schema only.
    pub async fn empty_service() -> ReportService {
        let db = ReportDb::open_local(":memory:").await.unwrap();
        ReportService::new(db, AsOf::Fixed(as_of()))
    }
}
