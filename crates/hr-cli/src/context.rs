use anyhow::Context;
use hr_config::HrConfig;
use hr_db::ReportDb;
use hr_db::service::{AsOf, ReportService};
use hr_reports::ReportDispatcher;

/// Open the configured store (creating and migrating it if needed).
pub async fn open_db(config: &HrConfig) -> anyhow::Result<ReportDb> {
    ReportDb::open_from_config(&config.database)
        .await
        .with_context(|| format!("failed to open store at {}", config.database.path))
}

/// Shared resources for report commands.
pub struct AppContext {
    pub config: HrConfig,
    pub dispatcher: ReportDispatcher,
}

impl AppContext {
    pub async fn init(config: HrConfig) -> anyhow::Result<Self> {
        let db = open_db(&config).await?;
        let as_of = AsOf::from(config.report.as_of_date()?);
        let service = ReportService::new(db, as_of);
        let dispatcher = ReportDispatcher::from_config(service, &config)?;
        Ok(Self { config, dispatcher })
    }
}
