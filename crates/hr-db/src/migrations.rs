//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::ReportDb;
use crate::error::DatabaseError;

/// Five relations with foreign keys and integrity checks.
const MIGRATION_001: &str = include_str!("../migrations/001_schema.sql");
/// Filter and join-key indexes.
const MIGRATION_002: &str = include_str!("../migrations/002_indexes.sql");

impl ReportDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_schema: {e}")))?;
        self.conn
            .execute_batch(MIGRATION_002)
            .await
            .map_err(|e| DatabaseError::Migration(format!("002_indexes: {e}")))?;
        Ok(())
    }
}
