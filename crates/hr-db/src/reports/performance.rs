//! Performance trends and department averages.

use hr_core::enums::Department;
use hr_core::filters::{DateRange, ScoreThreshold};
use hr_core::reports::{DepartmentScore, RankedReview};

use crate::error::DatabaseError;
use crate::helpers::{get_date, get_f64};
use crate::service::ReportService;

impl ReportService {
    /// Reviews in `department` within `range` scoring at least `threshold`,
    /// each ranked within its employee's filtered history by review date.
    ///
    /// `None` for `range` means [`DateRange::performance_default`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a stored date is malformed.
    pub async fn performance_trends(
        &self,
        department: Department,
        range: Option<DateRange>,
        threshold: ScoreThreshold,
    ) -> Result<Vec<RankedReview>, DatabaseError> {
        let (start, end) = range
            .unwrap_or_else(DateRange::performance_default)
            .to_sql_bounds();
        let min_score = i64::from(threshold.value());

        let mut rows = self
            .db()
            .query_with(
                "WITH filtered AS (
                     SELECT e.emp_id, e.name, p.review_date, p.score,
                            ROW_NUMBER() OVER (
                                PARTITION BY e.emp_id ORDER BY p.review_date, p.rowid
                            ) AS review_rank
                     FROM performance_reviews p
                     JOIN employees e ON p.emp_id = e.emp_id
                     JOIN departments d ON e.department_id = d.dept_id
                     WHERE d.name = ?1
                       AND p.review_date BETWEEN ?2 AND ?3
                       AND p.score >= ?4
                 )
                 SELECT emp_id, name, review_date, score, review_rank
                 FROM filtered
                 ORDER BY name, review_date, emp_id, review_rank",
                || libsql::params![department.as_str(), start.as_str(), end.as_str(), min_score],
            )
            .await?;

        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(RankedReview {
                employee_id: row.get::<i64>(0)?,
                employee_name: row.get::<String>(1)?,
                review_date: get_date(&row, 2)?,
                score: row.get::<i64>(3)?,
                rank: row.get::<i64>(4)?,
            });
        }

        tracing::debug!(%department, rows = reviews.len(), "performance trends");
        Ok(reviews)
    }

    /// Mean review score across `department`, or `None` if it has no reviews.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn department_performance(
        &self,
        department: Department,
    ) -> Result<Option<DepartmentScore>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                "SELECT d.name, AVG(p.score)
                 FROM performance_reviews p
                 JOIN employees e ON p.emp_id = e.emp_id
                 JOIN departments d ON e.department_id = d.dept_id
                 WHERE d.name = ?1
                 GROUP BY d.name",
                || libsql::params![department.as_str()],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(DepartmentScore {
                department: row.get::<String>(0)?,
                average_score: get_f64(&row, 1)?,
            })),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use hr_core::enums::Department;
    use hr_core::filters::{DateRange, ScoreThreshold};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::test_support::helpers::{date, empty_service, fixture_service};

    #[tokio::test]
    async fn ranks_are_contiguous_after_threshold() {
        let svc = fixture_service().await;
        let rows = svc
            .performance_trends(Department::Engineering, None, ScoreThreshold::DEFAULT)
            .await
            .unwrap();

        // Ann's 2021-06-01 review (score 4) is filtered out before ranking.
        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.employee_name.as_str(), r.review_date, r.score, r.rank))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Ann", date("2021-01-01"), 8, 1),
                ("Ann", date("2022-01-01"), 9, 2),
                ("Ben", date("2020-06-01"), 6, 1),
            ]
        );
    }

    #[rstest]
    #[case(0, 4)]
    #[case(5, 3)]
    #[case(9, 1)]
    #[case(10, 0)]
    #[tokio::test]
    async fn threshold_is_inclusive(#[case] threshold: u8, #[case] expected: usize) {
        let svc = fixture_service().await;
        let rows = svc
            .performance_trends(
                Department::Engineering,
                None,
                ScoreThreshold::new(threshold).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(rows.len(), expected);
    }

    #[tokio::test]
    async fn ranks_per_employee_are_one_to_k_for_every_filter() {
        let svc = fixture_service().await;
        let ranges = [
            None,
            Some(DateRange::new(date("2021-01-01"), date("2021-12-31")).unwrap()),
            Some(DateRange::new(date("2022-01-01"), date("2022-01-01")).unwrap()),
        ];
        for dept in Department::ALL {
            for range in ranges {
                for threshold in [ScoreThreshold::NONE, ScoreThreshold::DEFAULT] {
                    let rows = svc.performance_trends(dept, range, threshold).await.unwrap();
                    let mut by_emp: BTreeMap<i64, Vec<_>> = BTreeMap::new();
                    for row in rows {
                        by_emp.entry(row.employee_id).or_default().push(row);
                    }
                    for reviews in by_emp.values() {
                        let ranks: Vec<i64> = reviews.iter().map(|r| r.rank).collect();
                        let expected: Vec<i64> = (1..=ranks.len() as i64).collect();
                        assert_eq!(ranks, expected);
                        assert!(reviews.windows(2).all(|w| w[0].review_date <= w[1].review_date));
                    }
                }
            }
        }
    }

    #[tokio::test]
    async fn range_bounds_are_inclusive() {
        let svc = fixture_service().await;
        let range = DateRange::new(date("2021-01-01"), date("2021-06-01")).unwrap();
        let rows = svc
            .performance_trends(Department::Engineering, Some(range), ScoreThreshold::NONE)
            .await
            .unwrap();
        let dates: Vec<_> = rows.iter().map(|r| r.review_date).collect();
        assert_eq!(dates, vec![date("2021-01-01"), date("2021-06-01")]);
    }

    #[tokio::test]
    async fn department_average() {
        let svc = fixture_service().await;
        let eng = svc
            .department_performance(Department::Engineering)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(eng.department, "Engineering");
        assert!((eng.average_score - 6.75).abs() < f64::EPSILON);

        let hr = svc.department_performance(Department::Hr).await.unwrap().unwrap();
        assert!((hr.average_score - 3.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn department_average_is_not_rounded() {
        let svc = fixture_service().await;
        for score in [7, 6] {
            svc.db()
                .conn()
                .execute(
                    "INSERT INTO performance_reviews (emp_id, review_date, score) VALUES (5, '2021-02-01', ?1)",
                    libsql::params![score],
                )
                .await
                .unwrap();
        }

        let sales = svc
            .department_performance(Department::Sales)
            .await
            .unwrap()
            .unwrap();
        assert!((sales.average_score - 23.0 / 3.0).abs() < 1e-9);
        assert!((sales.average_score - 7.67).abs() > 1e-3);
    }

    #[tokio::test]
    async fn department_without_reviews_is_absent() {
        let svc = fixture_service().await;
        assert_eq!(
            svc.department_performance(Department::Marketing).await.unwrap(),
            None
        );
        let empty = empty_service().await;
        assert!(
            empty
                .performance_trends(Department::Sales, None, ScoreThreshold::NONE)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
