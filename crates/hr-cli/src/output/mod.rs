use hr_reports::ReportTable;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a report table. `human` applies to table output only; JSON and raw
/// keep ISO dates and plain numbers.
pub fn render_report(
    report: &ReportTable,
    format: OutputFormat,
    human: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report.to_json_records())?),
        OutputFormat::Raw => {
            let mut out = String::new();
            for record in report.to_json_records() {
                out.push_str(&serde_json::to_string(&record)?);
                out.push('\n');
            }
            Ok(out.trim_end().to_string())
        }
        OutputFormat::Table => {
            let headers = report.column_names();
            let rows = report.display_rows(human);
            Ok(table::render_table(&headers, &rows, table_options()))
        }
    }
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let Some(first) = items.first().and_then(Value::as_object) else {
                return Ok(String::from("(no rows)"));
            };
            let headers = first.keys().map(String::as_str).collect::<Vec<_>>();
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(*header).map_or_else(String::new, value_to_cell))
                        .collect()
                })
                .collect::<Vec<Vec<String>>>();
            Ok(table::render_table(&headers, &rows, table_options()))
        }
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, table_options()))
        }
        other => Ok(value_to_cell(other)),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(value_to_cell).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}
