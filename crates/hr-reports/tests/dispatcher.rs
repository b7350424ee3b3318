//! End-to-end dispatcher tests over an in-memory store.

use chrono::NaiveDate;
use hr_core::entities::{Employee, EmployeeProjectLog, PerformanceReview, Project};
use hr_core::enums::{Department, ReportKind};
use hr_core::filters::{MonthRange, ScoreThreshold};
use hr_db::ReportDb;
use hr_db::seed::{Dataset, SeedConfig, standard_departments};
use hr_db::service::{AsOf, ReportService};
use hr_reports::export::{ExportFormat, to_csv, to_json, write_export};
use hr_reports::{Cell, ReportDefaults, ReportDispatcher, ReportRequest};
use pretty_assertions::assert_eq;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn months(from: &str, to: &str) -> MonthRange {
    MonthRange::new(from.parse().unwrap(), to.parse().unwrap()).unwrap()
}

fn defaults() -> ReportDefaults {
    ReportDefaults {
        months: months("2015-01", "2025-12"),
        threshold: ScoreThreshold::DEFAULT,
    }
}

fn employee(emp_id: i64, name: &str, dept: i64, join: &str, exit: Option<&str>) -> Employee {
    Employee {
        emp_id,
        name: name.into(),
        age: Some(40),
        gender: Some("M".into()),
        department_id: Some(dept),
        join_date: date(join),
        exit_date: exit.map(date),
    }
}

/// Engineering exits in January and February 2021 only.
fn dataset() -> Dataset {
    Dataset {
        departments: standard_departments(),
        employees: vec![
            employee(1, "Ada", 2, "2018-02-01", None),
            employee(2, "Bo", 2, "2019-02-01", Some("2021-01-15")),
            employee(3, "Cy", 2, "2019-03-01", Some("2021-02-28")),
            employee(4, "Di", 3, "2019-04-01", Some("2021-03-05")),
        ],
        reviews: vec![
            PerformanceReview {
                emp_id: 1,
                review_date: date("2021-05-01"),
                score: 7,
                reviewer_id: None,
            },
            PerformanceReview {
                emp_id: 1,
                review_date: date("2022-05-01"),
                score: 3,
                reviewer_id: None,
            },
        ],
        projects: vec![Project {
            project_id: 1,
            name: "Atlas".into(),
            start_date: date("2021-01-01"),
            end_date: date("2021-06-30"),
        }],
        logs: vec![EmployeeProjectLog {
            emp_id: 1,
            project_id: 1,
            hours_logged: 5,
            log_date: date("2021-02-10"),
        }],
    }
}

async fn dispatcher(cache_enabled: bool) -> ReportDispatcher {
    let db = ReportDb::open_local(":memory:").await.unwrap();
    db.replace_dataset(&dataset()).await.unwrap();
    let service = ReportService::new(db, AsOf::Fixed(date("2024-06-30")));
    ReportDispatcher::new(service, defaults(), cache_enabled)
}

#[tokio::test]
async fn engineering_attrition_first_quarter_2021() {
    let dispatcher = dispatcher(true).await;
    let request = ReportRequest::new(ReportKind::Attrition, Department::Engineering)
        .with_months(months("2021-01", "2021-03"));

    let table = dispatcher.run(&request).await.unwrap();
    let months: Vec<_> = table.rows().iter().map(|r| r[0].clone()).collect();
    assert_eq!(
        months,
        vec![Cell::Text("2021-01".into()), Cell::Text("2021-02".into())]
    );
    assert_eq!(
        dispatcher.resolve(&request).file_name(ExportFormat::Csv),
        "Engineering_Attrition_2021-01_2021-03.csv"
    );
}

#[tokio::test]
async fn inapplicable_filters_are_dropped_from_the_key() {
    let dispatcher = dispatcher(true).await;
    let plain = ReportRequest::new(ReportKind::TenureLadder, Department::Engineering);
    let noisy = plain
        .with_months(months("2020-01", "2020-02"))
        .with_threshold(ScoreThreshold::new(9).unwrap());

    assert_eq!(dispatcher.resolve(&plain).key, dispatcher.resolve(&noisy).key);
    assert_eq!(dispatcher.resolve(&noisy).months, None);

    dispatcher.run(&plain).await.unwrap();
    dispatcher.run(&noisy).await.unwrap();
    let stats = dispatcher.cache_stats().unwrap();
    assert_eq!((stats.entries, stats.hits, stats.misses), (1, 1, 1));
}

#[tokio::test]
async fn missing_filters_take_defaults() {
    let dispatcher = dispatcher(true).await;
    let request = ReportRequest::new(ReportKind::PerformanceTrends, Department::Engineering);
    let resolved = dispatcher.resolve(&request);

    assert_eq!(resolved.months, Some(months("2015-01", "2025-12")));
    assert_eq!(resolved.key.threshold, Some(ScoreThreshold::DEFAULT));
    assert_eq!(
        resolved.key.range.map(|r| (r.start(), r.end())),
        Some((date("2015-01-01"), date("2025-12-31")))
    );

    // The 2022 review scores 3, under the default threshold of 5.
    let table = dispatcher.run(&request).await.unwrap();
    assert_eq!(table.len(), 1);
}

#[tokio::test]
async fn cache_hit_matches_uncached_computation() {
    let dispatcher = dispatcher(true).await;
    for kind in ReportKind::ALL {
        let request = ReportRequest::new(kind, Department::Engineering)
            .with_months(months("2021-01", "2021-12"));
        let first = dispatcher.run(&request).await.unwrap();
        let hit = dispatcher.run(&request).await.unwrap();
        let fresh = dispatcher.compute(dispatcher.resolve(&request).key).await.unwrap();

        assert_eq!(to_csv(&hit), to_csv(&fresh), "{kind}");
        assert_eq!(to_json(&hit).unwrap(), to_json(&first).unwrap(), "{kind}");
    }
    let stats = dispatcher.cache_stats().unwrap();
    assert_eq!(stats.misses, 7);
    assert_eq!(stats.hits, 7);
}

#[tokio::test]
async fn disabled_cache_still_answers() {
    let dispatcher = dispatcher(false).await;
    let request = ReportRequest::new(ReportKind::DepartmentPerformance, Department::Engineering);
    let table = dispatcher.run(&request).await.unwrap();
    assert_eq!(table.rows()[0], vec![Cell::Text("Engineering".into()), Cell::Real(5.0)]);
    assert!(dispatcher.cache_stats().is_none());
}

#[tokio::test]
async fn empty_result_is_not_a_failure() {
    let dispatcher = dispatcher(true).await;
    let request = ReportRequest::new(ReportKind::DepartmentPerformance, Department::Marketing);
    let table = dispatcher.run(&request).await.unwrap();
    assert!(table.is_empty());
}

#[tokio::test]
async fn broken_store_reports_unavailable() {
    let db = ReportDb::open_local(":memory:").await.unwrap();
    db.conn().execute("DROP TABLE employee_projects", ()).await.unwrap();
    let service = ReportService::new(db, AsOf::Fixed(date("2024-06-30")));
    let dispatcher = ReportDispatcher::new(service, defaults(), true);

    let request = ReportRequest::new(ReportKind::ProjectTimelines, Department::Sales);
    let err = dispatcher.run(&request).await.unwrap_err();
    assert!(err.is_store_unavailable());
    // Failures are not cached.
    assert_eq!(dispatcher.cache_stats().unwrap().entries, 0);
}

#[tokio::test]
async fn export_writes_named_file() {
    let dispatcher = dispatcher(true).await;
    let dir = tempfile::TempDir::new().unwrap();
    let request = ReportRequest::new(ReportKind::DepartmentLoad, Department::Engineering)
        .with_months(months("2021-02", "2021-02"));

    let table = dispatcher.run(&request).await.unwrap();
    let resolved = dispatcher.resolve(&request);
    let path = write_export(&table, &resolved, ExportFormat::Csv, dir.path()).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "Engineering_DeptLoad_2021-02_2021-02.csv"
    );
    let body = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        body,
        "department,current_headcount,log_date,avg_hours_logged_per_employee\nEngineering,1,2021-02-10,5.00\n"
    );
}

#[tokio::test]
async fn seeded_store_serves_every_report() {
    let db = ReportDb::open_local(":memory:").await.unwrap();
    db.seed(&SeedConfig {
        seed: Some(11),
        ..SeedConfig::default()
    })
    .await
    .unwrap();
    let dispatcher = ReportDispatcher::new(ReportService::new(db, AsOf::Today), defaults(), true);

    for dept in Department::ALL {
        for kind in ReportKind::ALL {
            let table = dispatcher.run(&ReportRequest::new(kind, dept)).await.unwrap();
            assert!(table.rows().iter().all(|r| r.len() == table.columns().len()));
        }
    }
}

#[tokio::test]
async fn cached_results_stay_stale_until_cleared() {
    let dispatcher = dispatcher(true).await;
    let request = ReportRequest::new(ReportKind::Attrition, Department::Sales)
        .with_months(months("2021-01", "2021-12"));
    assert_eq!(dispatcher.run(&request).await.unwrap().len(), 1);

    dispatcher
        .service()
        .db()
        .conn()
        .execute(
            "INSERT INTO employees (emp_id, name, department_id, join_date, exit_date)
             VALUES (5, 'Eli', 3, '2019-05-01', '2021-07-20')",
            (),
        )
        .await
        .unwrap();
    assert_eq!(dispatcher.run(&request).await.unwrap().len(), 1);

    dispatcher.clear_cache();
    assert_eq!(dispatcher.run(&request).await.unwrap().len(), 2);
}
