//! Report queries.
//!
//! Each module adds one or two read-only methods to `ReportService` via
//! `impl ReportService` blocks. Query text is static; department names,
//! date bounds, thresholds and the evaluation date are always bound as
//! parameters.

pub mod attrition;
pub mod load;
pub mod overlap;
pub mod performance;
pub mod tenure;
pub mod timelines;
