//! Monthly exit counts.

use hr_core::enums::Department;
use hr_core::filters::DateRange;
use hr_core::reports::AttritionMonth;

use crate::error::DatabaseError;
use crate::service::ReportService;

impl ReportService {
    /// Exits from `department` whose exit date falls in `range`, counted per
    /// calendar month. Months without exits are absent, not zero.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn attrition_rate(
        &self,
        department: Department,
        range: DateRange,
    ) -> Result<Vec<AttritionMonth>, DatabaseError> {
        let (start, end) = range.to_sql_bounds();
        let mut rows = self
            .db()
            .query_with(
                "SELECT strftime('%Y-%m', e.exit_date) AS year_month, COUNT(*) AS exits
                 FROM employees e
                 JOIN departments d ON e.department_id = d.dept_id
                 WHERE d.name = ?1
                   AND e.exit_date IS NOT NULL
                   AND e.exit_date BETWEEN ?2 AND ?3
                 GROUP BY year_month
                 ORDER BY year_month",
                || libsql::params![department.as_str(), start.as_str(), end.as_str()],
            )
            .await?;

        let mut months = Vec::new();
        while let Some(row) = rows.next().await? {
            months.push(AttritionMonth {
                year_month: row.get::<String>(0)?,
                exits: row.get::<i64>(1)?,
            });
        }
        Ok(months)
    }
}

#[cfg(test)]
mod tests {
    use hr_core::enums::Department;
    use hr_core::filters::{DateRange, MonthRange};
    use hr_core::reports::AttritionMonth;
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{date, fixture_dataset, fixture_service};

    fn month(year_month: &str, exits: i64) -> AttritionMonth {
        AttritionMonth {
            year_month: year_month.to_string(),
            exits,
        }
    }

    #[tokio::test]
    async fn engineering_q1_2021_omits_march() {
        let svc = fixture_service().await;
        let range = MonthRange::new("2021-01".parse().unwrap(), "2021-03".parse().unwrap())
            .unwrap()
            .to_date_range();
        let rows = svc
            .attrition_rate(Department::Engineering, range)
            .await
            .unwrap();
        // Eve's March exit belongs to Sales.
        assert_eq!(rows, vec![month("2021-01", 1), month("2021-02", 2)]);
    }

    #[tokio::test]
    async fn month_end_exit_is_counted() {
        let svc = fixture_service().await;
        let january = MonthRange::new("2021-01".parse().unwrap(), "2021-01".parse().unwrap())
            .unwrap()
            .to_date_range();
        let rows = svc
            .attrition_rate(Department::Engineering, january)
            .await
            .unwrap();
        assert_eq!(rows, vec![month("2021-01", 1)]);
    }

    #[tokio::test]
    async fn exit_counts_sum_to_exits_in_range() {
        let svc = fixture_service().await;
        let range = DateRange::new(date("2015-01-01"), date("2025-12-31")).unwrap();
        let dataset = fixture_dataset();

        for (dept_id, dept) in (1_i64..).zip(Department::ALL) {
            let rows = svc.attrition_rate(dept, range).await.unwrap();
            assert!(rows.iter().all(|r| r.exits > 0));

            let expected = dataset
                .employees
                .iter()
                .filter(|e| e.department_id == Some(dept_id))
                .filter(|e| e.exit_date.is_some_and(|d| range.contains(d)))
                .count();
            let total: i64 = rows.iter().map(|r| r.exits).sum();
            assert_eq!(total, expected as i64, "{dept}");
        }
    }

    #[tokio::test]
    async fn empty_range_yields_no_rows() {
        let svc = fixture_service().await;
        let range = DateRange::new(date("2010-01-01"), date("2010-12-31")).unwrap();
        assert!(
            svc.attrition_rate(Department::Engineering, range)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
