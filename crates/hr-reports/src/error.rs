//! Report layer error types.

use hr_core::errors::CoreError;
use hr_db::error::DatabaseError;
use thiserror::Error;

/// Failures surfaced by the dispatcher and exporters.
///
/// An empty result is not an error; see [`crate::table::ReportTable::is_empty`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// The store could not be reached or a query failed.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] DatabaseError),

    /// A filter value was malformed.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] CoreError),

    /// Serializing a table failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// Writing an export file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Whether callers should degrade (warn, show nothing) rather than fail.
    #[must_use]
    pub const fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Export(e.to_string())
    }
}
