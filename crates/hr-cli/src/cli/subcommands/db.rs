use clap::{Args, Subcommand};

/// Store management.
#[derive(Clone, Debug, Subcommand)]
pub enum DbCommands {
    /// Create the schema and indexes (idempotent) and show row counts.
    Init,
    /// Replace the store's contents with a synthetic dataset.
    Seed(SeedArgs),
    /// Show row counts per table.
    Stats,
}

#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Number of employees.
    #[arg(long, default_value_t = 100)]
    pub employees: usize,
    /// Number of performance reviews.
    #[arg(long, default_value_t = 100)]
    pub reviews: usize,
    /// Number of projects.
    #[arg(long, default_value_t = 10)]
    pub projects: usize,
    /// Number of project time logs.
    #[arg(long, default_value_t = 200)]
    pub logs: usize,
    /// RNG seed for a reproducible dataset.
    #[arg(long)]
    pub seed: Option<u64>,
}
