use std::path::PathBuf;

use hr_reports::ExportFormat;
use hr_reports::export::write_export;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ExportArgs, ExportAs};
use crate::commands::shared::{build_request, no_data_notice, run_report};
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

#[derive(Debug, Serialize)]
struct ExportResult {
    path: PathBuf,
    rows: usize,
}

const fn export_format(value: ExportAs) -> ExportFormat {
    match value {
        ExportAs::Csv => ExportFormat::Csv,
        ExportAs::Json => ExportFormat::Json,
    }
}

/// Handle `hrlens export`.
pub async fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = build_request(args.kind, &args.filters, ctx.dispatcher.defaults())?;
    let Some(table) = run_report(ctx, &request).await? else {
        return Ok(());
    };

    if table.is_empty() {
        ui::notice(&format!("{} Nothing exported.", no_data_notice(&request)));
        return Ok(());
    }

    let resolved = ctx.dispatcher.resolve(&request);
    let path = write_export(
        &table.sorted_for_display(),
        &resolved,
        export_format(args.file_format),
        &args.out_dir,
    )?;

    output(
        &ExportResult {
            path,
            rows: table.len(),
        },
        flags.format,
    )
}
