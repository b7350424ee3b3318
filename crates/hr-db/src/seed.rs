//! Synthetic dataset generation and bulk loading.
//!
//! [`generate`] builds a random but internally consistent dataset (every
//! review and log references an existing employee and project, exits never
//! precede joins, projects never end before they start). [`ReportDb::replace_dataset`]
//! swaps the store's contents for a dataset inside one transaction.

use chrono::NaiveDate;
use hr_core::entities::{self, Employee, EmployeeProjectLog, PerformanceReview, Project};
use hr_core::enums::Department;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::ReportDb;
use crate::error::DatabaseError;

const FIRST_NAMES: [&str; 26] = [
    "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Helen", "Ivy", "Jack", "Karen",
    "Liam", "Mason", "Nina", "Oscar", "Paul", "Quincy", "Rachel", "Sam", "Tom", "Uma", "Vera",
    "Will", "Xander", "Yara", "Zane",
];

const GENDERS: [&str; 2] = ["M", "F"];

/// Sizes and RNG seed for a generated dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub employees: usize,
    pub reviews: usize,
    pub projects: usize,
    pub logs: usize,
    /// Fixed seed for reproducible output; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            employees: 100,
            reviews: 100,
            projects: 10,
            logs: 200,
            seed: None,
        }
    }
}

/// Row counts written by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub departments: usize,
    pub employees: usize,
    pub reviews: usize,
    pub projects: usize,
    pub logs: usize,
}

/// A complete set of rows for every relation.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub departments: Vec<entities::Department>,
    pub employees: Vec<Employee>,
    pub reviews: Vec<PerformanceReview>,
    pub projects: Vec<Project>,
    pub logs: Vec<EmployeeProjectLog>,
}

impl Dataset {
    #[must_use]
    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            departments: self.departments.len(),
            employees: self.employees.len(),
            reviews: self.reviews.len(),
            projects: self.projects.len(),
            logs: self.logs.len(),
        }
    }
}

/// The five fixed departments, `dept_id` 1..=5, each headed by the employee
/// with the same id.
#[must_use]
pub fn standard_departments() -> Vec<entities::Department> {
    Department::ALL
        .iter()
        .zip(1_i64..)
        .map(|(dept, id)| entities::Department {
            dept_id: id,
            name: dept.as_str().to_string(),
            head_id: Some(id),
        })
        .collect()
}

/// Build a random dataset.
///
/// Reviews and logs need at least one employee (and logs one project);
/// without them those relations are left empty.
#[must_use]
pub fn generate(config: &SeedConfig) -> Dataset {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let departments = standard_departments();
    let dept_count = i64::try_from(departments.len()).unwrap_or(1);

    let employees: Vec<Employee> = (1_i64..)
        .take(config.employees)
        .map(|emp_id| {
            let join = random_date(&mut rng, 2010, 2021);
            let exit = rng
                .gen_bool(0.5)
                .then(|| random_date(&mut rng, 2010, 2021));
            let (join_date, exit_date) = match exit {
                Some(exit) if exit < join => (exit, Some(join)),
                other => (join, other),
            };
            Employee {
                emp_id,
                name: pick(&mut rng, &FIRST_NAMES).to_string(),
                age: Some(rng.gen_range(22..=55)),
                gender: Some(pick(&mut rng, &GENDERS).to_string()),
                department_id: Some(rng.gen_range(1..=dept_count)),
                join_date,
                exit_date,
            }
        })
        .collect();

    let projects: Vec<Project> = (1_i64..)
        .take(config.projects)
        .zip(0_usize..)
        .map(|(project_id, idx)| {
            let start = random_date(&mut rng, 2020, 2022);
            let end = random_date(&mut rng, 2022, 2023);
            let (start_date, end_date) = if end < start { (end, start) } else { (start, end) };
            Project {
                project_id,
                name: project_name(idx),
                start_date,
                end_date,
            }
        })
        .collect();

    let emp_max = i64::try_from(employees.len()).unwrap_or(0);
    let project_max = i64::try_from(projects.len()).unwrap_or(0);

    let reviews = if emp_max == 0 {
        Vec::new()
    } else {
        (0..config.reviews)
            .map(|_| PerformanceReview {
                emp_id: rng.gen_range(1..=emp_max),
                review_date: random_date(&mut rng, 2019, 2022),
                score: rng.gen_range(1..=10),
                reviewer_id: Some(rng.gen_range(1..=dept_count)),
            })
            .collect()
    };

    let logs = if emp_max == 0 || project_max == 0 {
        Vec::new()
    } else {
        (0..config.logs)
            .map(|_| EmployeeProjectLog {
                emp_id: rng.gen_range(1..=emp_max),
                project_id: rng.gen_range(1..=project_max),
                hours_logged: rng.gen_range(1..=8),
                log_date: random_date(&mut rng, 2011, 2024),
            })
            .collect()
    };

    Dataset {
        departments,
        employees,
        reviews,
        projects,
        logs,
    }
}

/// `Project A` .. `Project Z`, then `Project A2` .. and so on.
fn project_name(idx: usize) -> String {
    let letter = char::from(b'A' + u8::try_from(idx % 26).unwrap_or(0));
    match idx / 26 {
        0 => format!("Project {letter}"),
        round => format!("Project {letter}{}", round + 1),
    }
}

/// Day 1–28 of a random month in `[from_year, to_year]`, valid in every month.
fn random_date(rng: &mut StdRng, from_year: i32, to_year: i32) -> NaiveDate {
    let year = rng.gen_range(from_year..=to_year);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn pick<'a>(rng: &mut StdRng, items: &'a [&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

impl ReportDb {
    /// Replace every relation's contents with `dataset`, atomically.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any statement fails (the transaction is
    /// rolled back) or the dataset violates a schema constraint.
    pub async fn replace_dataset(&self, dataset: &Dataset) -> Result<SeedSummary, DatabaseError> {
        let tx = self.conn().transaction().await?;

        for table in crate::TABLES.iter().rev() {
            tx.execute(&format!("DELETE FROM {table}"), ()).await?;
        }

        for dept in &dataset.departments {
            tx.execute(
                "INSERT INTO departments (dept_id, name, head_id) VALUES (?1, ?2, ?3)",
                libsql::params![dept.dept_id, dept.name.as_str(), dept.head_id],
            )
            .await?;
        }

        for emp in &dataset.employees {
            tx.execute(
                "INSERT INTO employees (emp_id, name, age, gender, department_id, join_date, exit_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    emp.emp_id,
                    emp.name.as_str(),
                    emp.age,
                    emp.gender.as_deref(),
                    emp.department_id,
                    emp.join_date.to_string(),
                    emp.exit_date.map(|d| d.to_string()),
                ],
            )
            .await?;
        }

        for review in &dataset.reviews {
            tx.execute(
                "INSERT INTO performance_reviews (emp_id, review_date, score, reviewer_id)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    review.emp_id,
                    review.review_date.to_string(),
                    review.score,
                    review.reviewer_id,
                ],
            )
            .await?;
        }

        for project in &dataset.projects {
            tx.execute(
                "INSERT INTO projects (project_id, name, start_date, end_date) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    project.project_id,
                    project.name.as_str(),
                    project.start_date.to_string(),
                    project.end_date.to_string(),
                ],
            )
            .await?;
        }

        for log in &dataset.logs {
            tx.execute(
                "INSERT INTO employee_projects (emp_id, project_id, hours_logged, log_date)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    log.emp_id,
                    log.project_id,
                    log.hours_logged,
                    log.log_date.to_string(),
                ],
            )
            .await?;
        }

        tx.commit().await?;

        let summary = dataset.summary();
        tracing::info!(
            employees = summary.employees,
            reviews = summary.reviews,
            projects = summary.projects,
            logs = summary.logs,
            "dataset loaded"
        );
        Ok(summary)
    }

    /// Generate a dataset from `config` and load it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if loading fails.
    pub async fn seed(&self, config: &SeedConfig) -> Result<SeedSummary, DatabaseError> {
        let dataset = generate(config);
        self.replace_dataset(&dataset).await
    }
}
