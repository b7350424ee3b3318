use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use hr_core::enums::{Department, ReportKind};
use hr_core::filters::{ScoreThreshold, YearMonth};

use crate::cli::subcommands::DbCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Store management.
    Db {
        #[command(subcommand)]
        action: DbCommands,
    },
    /// List report kinds and the filters each one uses.
    Reports,
    /// Run a report and print it.
    Report(ReportArgs),
    /// Run a report and write it to a file.
    Export(ExportArgs),
    /// Print the JSON Schema of a report's row type.
    Schema(SchemaArgs),
}

/// Filters shared by `report` and `export`.
#[derive(Clone, Debug, Args)]
pub struct FilterArgs {
    /// Department (HR, Engineering, Sales, Marketing, Finance).
    #[arg(short, long)]
    pub department: Department,
    /// First month of the range (YYYY-MM). Ignored by reports without a range.
    #[arg(long)]
    pub from: Option<YearMonth>,
    /// Last month of the range (YYYY-MM). Ignored by reports without a range.
    #[arg(long)]
    pub to: Option<YearMonth>,
    /// Minimum performance score, 0-10. Only used by performance-trends.
    #[arg(long)]
    pub threshold: Option<ScoreThreshold>,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Report kind (see `hrlens reports`).
    pub kind: ReportKind,
    #[command(flatten)]
    pub filters: FilterArgs,
    /// Render dates as `Month DD, YYYY` and group digits in table output.
    #[arg(long)]
    pub human: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportAs {
    Csv,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Report kind (see `hrlens reports`).
    pub kind: ReportKind,
    #[command(flatten)]
    pub filters: FilterArgs,
    /// File format. Independent of the global `--format` output mode.
    #[arg(id = "export_format", long = "as", value_enum, default_value = "csv")]
    pub file_format: ExportAs,
    /// Directory to write into (created if missing).
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Report kind whose row type to describe.
    pub kind: ReportKind,
}
