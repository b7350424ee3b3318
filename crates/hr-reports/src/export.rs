//! Spreadsheet and JSON export with deterministic file names.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use hr_core::enums::{Department, ReportKind};
use hr_core::errors::CoreError;
use hr_core::filters::MonthRange;

use crate::dispatcher::ResolvedRequest;
use crate::error::ReportError;
use crate::table::{Cell, ReportTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(CoreError::UnknownVariant {
                kind: "export format",
                value: s.to_string(),
                expected: "csv, json".to_string(),
            }),
        }
    }
}

/// `{Department}_{Label}[_{YYYY-MM}_{YYYY-MM}].{ext}`.
///
/// The month suffix appears only for reports filtered by month.
#[must_use]
pub fn file_name(
    kind: ReportKind,
    department: Department,
    months: Option<MonthRange>,
    format: ExportFormat,
) -> String {
    let stem = match months {
        Some(months) if kind.uses_months() => {
            format!("{department}_{}_{}", kind.file_label(), months.file_label())
        }
        _ => format!("{department}_{}", kind.file_label()),
    };
    format!("{stem}.{}", format.extension())
}

/// Header row of column names, then one line per row. Fields containing a
/// comma, quote or line break are quoted with embedded quotes doubled.
#[must_use]
pub fn to_csv(table: &ReportTable) -> String {
    let mut out = String::new();
    push_record(&mut out, table.columns().iter().map(|c| c.name.to_string()));
    for row in table.rows() {
        push_record(&mut out, row.iter().map(Cell::to_plain));
    }
    out
}

fn push_record(out: &mut String, fields: impl Iterator<Item = String>) {
    for (idx, field) in fields.enumerate() {
        if idx > 0 {
            out.push(',');
        }
        if field.contains([',', '"', '\n', '\r']) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(&field);
        }
    }
    out.push('\n');
}

/// Pretty-printed array of objects keyed by column name.
///
/// # Errors
///
/// Returns `ReportError::Export` if serialization fails.
pub fn to_json(table: &ReportTable) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&table.to_json_records())?)
}

/// Render `table` and write it to `dir`, named after `request`.
///
/// # Errors
///
/// Returns `ReportError::Io` if the directory or file cannot be written.
pub fn write_export(
    table: &ReportTable,
    request: &ResolvedRequest,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    let body = match format {
        ExportFormat::Csv => to_csv(table),
        ExportFormat::Json => to_json(table)?,
    };
    std::fs::create_dir_all(dir)?;
    let path = dir.join(request.file_name(format));
    std::fs::write(&path, body)?;
    tracing::debug!(path = %path.display(), rows = table.len(), "report exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_core::reports::{OverlapPair, TenureRecord};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn months(from: &str, to: &str) -> MonthRange {
        MonthRange::new(from.parse().unwrap(), to.parse().unwrap()).unwrap()
    }

    #[rstest]
    #[case(ReportKind::Attrition, Department::Engineering, Some(("2021-01", "2021-03")), ExportFormat::Csv, "Engineering_Attrition_2021-01_2021-03.csv")]
    #[case(ReportKind::DepartmentLoad, Department::Hr, Some(("2020-05", "2020-05")), ExportFormat::Json, "HR_DeptLoad_2020-05_2020-05.json")]
    #[case(ReportKind::PerformanceTrends, Department::Finance, Some(("2015-01", "2025-12")), ExportFormat::Csv, "Finance_Performance_2015-01_2025-12.csv")]
    #[case(ReportKind::TenureLadder, Department::Sales, None, ExportFormat::Csv, "Sales_Tenure_Ladder.csv")]
    #[case(ReportKind::ProjectOverlap, Department::Marketing, Some(("2021-01", "2021-03")), ExportFormat::Csv, "Marketing_Project_Overlap.csv")]
    fn file_names(
        #[case] kind: ReportKind,
        #[case] department: Department,
        #[case] range: Option<(&str, &str)>,
        #[case] format: ExportFormat,
        #[case] expected: &str,
    ) {
        let months = range.map(|(from, to)| months(from, to));
        assert_eq!(file_name(kind, department, months, format), expected);
    }

    #[test]
    fn csv_quotes_special_fields() {
        let table = ReportTable::from_rows(
            ReportKind::ProjectOverlap,
            vec![OverlapPair {
                employee_id: 1,
                employee_name: "Smith, \"Ann\"".into(),
                project1: "Apollo".into(),
                project2: "Line\nBreak".into(),
            }],
        );
        assert_eq!(
            to_csv(&table),
            "employee_id,name,project1,project2\n1,\"Smith, \"\"Ann\"\"\",Apollo,\"Line\nBreak\"\n"
        );
    }

    #[test]
    fn csv_renders_nulls_as_empty() {
        let table = ReportTable::from_rows(
            ReportKind::TenureLadder,
            vec![TenureRecord {
                employee_id: 3,
                name: "Cara".into(),
                join_date: "2020-03-01".parse().unwrap(),
                exit_date: None,
                tenure_years: 0.5,
            }],
        );
        assert_eq!(
            to_csv(&table),
            "emp_id,name,join_date,exit_date,tenure_years\n3,Cara,2020-03-01,,0.50\n"
        );
    }

    #[test]
    fn json_is_an_array_of_records() {
        let table = ReportTable::from_rows::<OverlapPair>(ReportKind::ProjectOverlap, Vec::new());
        assert_eq!(to_json(&table).unwrap(), "[]");
    }

    #[test]
    fn export_format_parses() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("png".parse::<ExportFormat>().is_err());
    }
}
