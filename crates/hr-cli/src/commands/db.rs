use hr_config::HrConfig;
use hr_db::seed::SeedConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{DbCommands, SeedArgs};
use crate::context::open_db;
use crate::output::output;
use crate::ui;

#[derive(Debug, Serialize)]
struct TableCount {
    table: &'static str,
    rows: i64,
}

impl From<&SeedArgs> for SeedConfig {
    fn from(args: &SeedArgs) -> Self {
        Self {
            employees: args.employees,
            reviews: args.reviews,
            projects: args.projects,
            logs: args.logs,
            seed: args.seed,
        }
    }
}

/// Handle `hrlens db`.
pub async fn handle(action: &DbCommands, config: &HrConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = open_db(config).await?;
    match action {
        DbCommands::Init => {
            ui::notice(&format!("Schema ready at {}.", config.database.path));
        }
        DbCommands::Seed(args) => {
            let summary = db.seed(&SeedConfig::from(args)).await?;
            ui::notice(&format!(
                "Seeded {} employees, {} reviews, {} projects and {} time logs.",
                summary.employees, summary.reviews, summary.projects, summary.logs
            ));
        }
        DbCommands::Stats => {}
    }

    let counts = db
        .table_counts()
        .await?
        .into_iter()
        .map(|(table, rows)| TableCount { table, rows })
        .collect::<Vec<_>>();
    output(&counts, flags.format)
}
