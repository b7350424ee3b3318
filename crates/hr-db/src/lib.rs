//! # hr-db
//!
//! libSQL store access for HR Lens.
//!
//! Owns the schema (departments, employees, performance reviews, projects,
//! project time logs), the seven report queries exposed through
//! [`service::ReportService`], and the synthetic dataset generator used to
//! populate a fresh store.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) against a local file or
//! `:memory:`.

pub mod error;
pub mod helpers;
mod migrations;
pub mod reports;
pub mod retry;
pub mod seed;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

use std::time::Instant;

use error::DatabaseError;
use hr_config::DatabaseConfig;
use libsql::Builder;
use libsql::params::IntoParams;
use retry::{RetryConfig, is_transient_store_error};

/// Relations created by the schema migration, in dependency order.
pub const TABLES: [&str; 5] = [
    "departments",
    "employees",
    "performance_reviews",
    "projects",
    "employee_projects",
];

/// Central store handle.
///
/// Wraps a libSQL database and connection. The connection is shared by `&`
/// reference; every report query is a read.
pub struct ReportDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    retry: RetryConfig,
}

impl ReportDb {
    /// Open a local database at the given path, creating it if absent.
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open_with_retry(path, RetryConfig::default()).await
    }

    /// Open the store described by a [`DatabaseConfig`].
    ///
    /// Creates the parent directory of a file-backed store if needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created, the
    /// database cannot be opened or migrations fail.
    pub async fn open_from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if !config.is_in_memory() {
            if let Some(parent) = std::path::Path::new(&config.path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        DatabaseError::InvalidState(format!(
                            "cannot create store directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }
        Self::open_with_retry(&config.path, RetryConfig::from(config)).await
    }

    async fn open_with_retry(path: &str, retry: RetryConfig) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let report_db = Self { db, conn, retry };
        report_db.run_migrations().await?;
        tracing::debug!(path, "store opened");
        Ok(report_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Run a query, retrying lock contention with capped backoff.
    ///
    /// `params` is called once per attempt since libSQL consumes parameters.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` once attempts are exhausted or on the
    /// first non-transient error.
    pub async fn query_with<P, F>(&self, sql: &str, params: F) -> Result<libsql::Rows, DatabaseError>
    where
        P: IntoParams,
        F: Fn() -> P,
    {
        let mut attempt = 1;
        loop {
            let started = Instant::now();
            match self.conn.query(sql, params()).await {
                Ok(rows) => {
                    tracing::trace!(elapsed_ms = started.elapsed().as_millis(), "query ok");
                    return Ok(rows);
                }
                Err(e) if attempt < self.retry.max_attempts && is_transient_store_error(&e) => {
                    let delay = self.retry.delay_for(attempt);
                    tracing::warn!(attempt, ?delay, error = %e, "store busy, retrying query");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Execute a statement with the same retry policy as [`Self::query_with`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` once attempts are exhausted or on the
    /// first non-transient error.
    pub async fn execute_with<P, F>(&self, sql: &str, params: F) -> Result<u64, DatabaseError>
    where
        P: IntoParams,
        F: Fn() -> P,
    {
        let mut attempt = 1;
        loop {
            match self.conn.execute(sql, params()).await {
                Ok(changed) => return Ok(changed),
                Err(e) if attempt < self.retry.max_attempts && is_transient_store_error(&e) => {
                    let delay = self.retry.delay_for(attempt);
                    tracing::warn!(attempt, ?delay, error = %e, "store busy, retrying statement");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Row count for every relation, in [`TABLES`] order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any count query fails.
    pub async fn table_counts(&self) -> Result<Vec<(&'static str, i64)>, DatabaseError> {
        let mut counts = Vec::with_capacity(TABLES.len());
        for table in TABLES {
            // Table names come from the fixed list above, never from input.
            let sql = format!("SELECT COUNT(*) FROM {table}");
            let mut rows = self.query_with(&sql, || ()).await?;
            let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
            counts.push((table, row.get::<i64>(0)?));
        }
        Ok(counts)
    }
}
