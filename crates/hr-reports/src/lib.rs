//! # hr-reports
//!
//! The report layer on top of `hr-db`:
//! - [`table::ReportTable`], the typed tabular form every report takes
//! - [`cache::ResultCache`], explicit memoization keyed by the resolved filter tuple
//! - [`dispatcher::ReportDispatcher`], filter applicability and defaults
//! - [`export`], CSV/JSON rendering and file naming

pub mod cache;
pub mod dispatcher;
pub mod error;
pub mod export;
pub mod table;

pub use cache::{CacheStats, ReportKey, ResultCache};
pub use dispatcher::{ReportDefaults, ReportDispatcher, ReportRequest, ResolvedRequest};
pub use error::ReportError;
pub use export::ExportFormat;
pub use table::{Cell, Column, ColumnType, ReportTable};
