use std::sync::Arc;

use hr_core::enums::ReportKind;
use hr_core::filters::MonthRange;
use hr_reports::{ReportDefaults, ReportRequest, ReportTable};

use crate::cli::root_commands::FilterArgs;
use crate::context::AppContext;
use crate::ui;

/// Turn command-line filters into a request. A lone `--from` or `--to` is
/// completed from the configured default range.
pub fn build_request(
    kind: ReportKind,
    filters: &FilterArgs,
    defaults: ReportDefaults,
) -> anyhow::Result<ReportRequest> {
    let mut request = ReportRequest::new(kind, filters.department);
    if filters.from.is_some() || filters.to.is_some() {
        let start = filters.from.unwrap_or_else(|| defaults.months.start());
        let end = filters.to.unwrap_or_else(|| defaults.months.end());
        request = request.with_months(MonthRange::new(start, end)?);
    }
    if let Some(threshold) = filters.threshold {
        request = request.with_threshold(threshold);
    }
    Ok(request)
}

/// Run `request`. A store failure is shown as a warning and yields `None`.
pub async fn run_report(
    ctx: &AppContext,
    request: &ReportRequest,
) -> anyhow::Result<Option<Arc<ReportTable>>> {
    match ctx.dispatcher.run(request).await {
        Ok(table) => Ok(Some(table)),
        Err(error) if error.is_store_unavailable() => {
            ui::warn(&format!(
                "{} for {} is unavailable (store {}): {error}",
                request.kind.title(),
                request.department,
                ctx.config.database.path
            ));
            Ok(None)
        }
        Err(error) => Err(error.into()),
    }
}

pub fn no_data_notice(request: &ReportRequest) -> String {
    format!(
        "No data for {} ({}) with the selected filters.",
        request.kind.title(),
        request.department
    )
}
