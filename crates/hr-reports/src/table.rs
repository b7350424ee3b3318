//! Tabular report results.
//!
//! Every report, whatever its row type, is flattened into a [`ReportTable`]:
//! named typed columns plus rows of [`Cell`]s. Renderers and exporters only
//! ever see this shape.

use chrono::NaiveDate;
use hr_core::enums::ReportKind;
use hr_core::format::{format_date, format_number};
use hr_core::reports::{
    AttritionMonth, DepartmentScore, LoadSample, OverlapPair, ProjectTimelineRow, RankedReview,
    TenureRecord,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Integer key. Never digit-grouped.
    Id,
    Integer,
    Real,
    Text,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: ColumnType,
}

impl Column {
    const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self { name, ty }
    }

    /// Human rendering of a cell in this column. Identifiers stay plain.
    #[must_use]
    pub fn render_human(&self, cell: &Cell) -> String {
        match self.ty {
            ColumnType::Id => cell.to_plain(),
            _ => cell.to_human(),
        }
    }
}

/// A single value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Date(NaiveDate),
}

impl Cell {
    /// Plain rendering: ISO dates, reals to two decimals, empty for null.
    #[must_use]
    pub fn to_plain(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Integer(v) => v.to_string(),
            Self::Real(v) => format!("{v:.2}"),
            Self::Text(s) => s.clone(),
            Self::Date(d) => d.to_string(),
        }
    }

    /// Human rendering: `Month DD, YYYY` dates and grouped integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_human(&self) -> String {
        match self {
            Self::Integer(v) => format_number(*v as f64),
            Self::Date(d) => format_date(&d.to_string()),
            other => other.to_plain(),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Integer(v) => Value::from(*v),
            Self::Real(v) => Value::from(*v),
            Self::Text(s) => Value::String(s.clone()),
            Self::Date(d) => Value::String(d.to_string()),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<NaiveDate> for Cell {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// A report row type that can be flattened into table cells.
pub trait TableRow {
    /// Column layout, in the order [`TableRow::into_cells`] emits values.
    const COLUMNS: &'static [Column];

    fn into_cells(self) -> Vec<Cell>;
}

/// The result of one report invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    kind: ReportKind,
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    #[must_use]
    pub fn from_rows<R: TableRow>(kind: ReportKind, rows: Vec<R>) -> Self {
        Self {
            kind,
            columns: R::COLUMNS.to_vec(),
            rows: rows.into_iter().map(TableRow::into_cells).collect(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ReportKind {
        self.kind
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Zero matching rows. Distinct from a failed query.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Rows rendered for display: human formatting per column, or plain.
    #[must_use]
    pub fn display_rows(&self, human: bool) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(col, cell)| {
                        if human {
                            col.render_human(cell)
                        } else {
                            cell.to_plain()
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Rows as JSON objects keyed by column name.
    #[must_use]
    pub fn to_json_records(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let record: Map<String, Value> = self
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(col, cell)| (col.name.to_string(), cell.to_json()))
                    .collect();
                Value::Object(record)
            })
            .collect()
    }

    /// Stable ordering for display: tenure ladders sort by tenure, longest
    /// first. Other reports keep query order.
    #[must_use]
    pub fn sorted_for_display(&self) -> Self {
        let mut table = self.clone();
        if self.kind == ReportKind::TenureLadder {
            if let Some(idx) = self.columns.iter().position(|c| c.name == "tenure_years") {
                table.rows.sort_by(|a, b| {
                    let key = |row: &[Cell]| match row.get(idx) {
                        Some(Cell::Real(v)) => *v,
                        _ => f64::MIN,
                    };
                    key(b).total_cmp(&key(a))
                });
            }
        }
        table
    }
}

impl TableRow for RankedReview {
    const COLUMNS: &'static [Column] = &[
        Column::new("employee_id", ColumnType::Id),
        Column::new("employee_name", ColumnType::Text),
        Column::new("review_date", ColumnType::Date),
        Column::new("score", ColumnType::Integer),
        Column::new("performance_rank", ColumnType::Integer),
    ];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.employee_id.into(),
            self.employee_name.into(),
            self.review_date.into(),
            self.score.into(),
            self.rank.into(),
        ]
    }
}

impl TableRow for DepartmentScore {
    const COLUMNS: &'static [Column] = &[
        Column::new("department", ColumnType::Text),
        Column::new("avg_score", ColumnType::Real),
    ];

    fn into_cells(self) -> Vec<Cell> {
        vec![self.department.into(), self.average_score.into()]
    }
}

impl TableRow for AttritionMonth {
    const COLUMNS: &'static [Column] = &[
        Column::new("month", ColumnType::Text),
        Column::new("exits", ColumnType::Integer),
    ];

    fn into_cells(self) -> Vec<Cell> {
        vec![self.year_month.into(), self.exits.into()]
    }
}

impl TableRow for LoadSample {
    const COLUMNS: &'static [Column] = &[
        Column::new("department", ColumnType::Text),
        Column::new("current_headcount", ColumnType::Integer),
        Column::new("log_date", ColumnType::Date),
        Column::new("avg_hours_logged_per_employee", ColumnType::Real),
    ];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.department.into(),
            self.current_headcount.into(),
            self.log_date.into(),
            self.avg_hours_logged_per_employee.into(),
        ]
    }
}

impl TableRow for OverlapPair {
    const COLUMNS: &'static [Column] = &[
        Column::new("employee_id", ColumnType::Id),
        Column::new("name", ColumnType::Text),
        Column::new("project1", ColumnType::Text),
        Column::new("project2", ColumnType::Text),
    ];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.employee_id.into(),
            self.employee_name.into(),
            self.project1.into(),
            self.project2.into(),
        ]
    }
}

impl TableRow for TenureRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("emp_id", ColumnType::Id),
        Column::new("name", ColumnType::Text),
        Column::new("join_date", ColumnType::Date),
        Column::new("exit_date", ColumnType::Date),
        Column::new("tenure_years", ColumnType::Real),
    ];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.employee_id.into(),
            self.name.into(),
            self.join_date.into(),
            self.exit_date.into(),
            self.tenure_years.into(),
        ]
    }
}

impl TableRow for ProjectTimelineRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("employee_name", ColumnType::Text),
        Column::new("project_name", ColumnType::Text),
        Column::new("hours_logged", ColumnType::Integer),
        Column::new("start_date", ColumnType::Date),
        Column::new("end_date", ColumnType::Date),
        Column::new("log_date", ColumnType::Date),
    ];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.employee_name.into(),
            self.project_name.into(),
            self.hours_logged.into(),
            self.project_start.into(),
            self.project_end.into(),
            self.log_date.into(),
        ]
    }
}
