use hr_config::HrConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;
use crate::ui;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, config: HrConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Db { action } => commands::db::handle(&action, &config, flags).await,
        Commands::Report(args) => {
            let Some(ctx) = init_or_warn(config).await else {
                return Ok(());
            };
            commands::report::handle(&args, &ctx, flags).await
        }
        Commands::Export(args) => {
            let Some(ctx) = init_or_warn(config).await else {
                return Ok(());
            };
            commands::export::handle(&args, &ctx, flags).await
        }
        Commands::Reports | Commands::Schema(_) => {
            unreachable!("reports/schema are pre-dispatched in main")
        }
    }
}

/// An unreachable store is reported and the command ends without output.
async fn init_or_warn(config: HrConfig) -> Option<AppContext> {
    match AppContext::init(config).await {
        Ok(ctx) => Some(ctx),
        Err(error) => {
            ui::warn(&format!("report store unavailable: {error:#}"));
            None
        }
    }
}
