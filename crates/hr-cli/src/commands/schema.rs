use hr_core::enums::ReportKind;
use hr_core::reports::{
    AttritionMonth, DepartmentScore, LoadSample, OverlapPair, ProjectTimelineRow, RankedReview,
    TenureRecord,
};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;

/// JSON Schema of the row type behind `kind`.
fn row_schema(kind: ReportKind) -> Schema {
    match kind {
        ReportKind::PerformanceTrends => schema_for!(RankedReview),
        ReportKind::DepartmentPerformance => schema_for!(DepartmentScore),
        ReportKind::Attrition => schema_for!(AttritionMonth),
        ReportKind::DepartmentLoad => schema_for!(LoadSample),
        ReportKind::TenureLadder => schema_for!(TenureRecord),
        ReportKind::ProjectOverlap => schema_for!(OverlapPair),
        ReportKind::ProjectTimelines => schema_for!(ProjectTimelineRow),
    }
}

/// Handle `hrlens schema`. Always JSON, whatever `--format` says.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&row_schema(args.kind))?);
    Ok(())
}
