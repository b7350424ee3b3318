use hr_core::enums::ReportKind;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ReportInfo {
    kind: ReportKind,
    title: &'static str,
    month_range: bool,
    threshold: bool,
}

fn catalogue() -> Vec<ReportInfo> {
    ReportKind::ALL
        .into_iter()
        .map(|kind| ReportInfo {
            kind,
            title: kind.title(),
            month_range: kind.uses_months(),
            threshold: kind.uses_threshold(),
        })
        .collect()
}

/// Handle `hrlens reports`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&catalogue(), flags.format)
}
