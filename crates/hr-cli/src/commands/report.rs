use crate::cli::root_commands::ReportArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{build_request, no_data_notice, run_report};
use crate::context::AppContext;
use crate::output::render_report;
use crate::ui;

/// Handle `hrlens report`.
pub async fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = build_request(args.kind, &args.filters, ctx.dispatcher.defaults())?;
    let Some(table) = run_report(ctx, &request).await? else {
        return Ok(());
    };

    if table.is_empty() {
        ui::notice(&no_data_notice(&request));
        if flags.format == OutputFormat::Table {
            return Ok(());
        }
    }

    let rendered = render_report(&table.sorted_for_display(), flags.format, args.human)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
