//! # hr-core
//!
//! Core types shared across all HR Lens crates:
//! - Entity structs for the five store relations (departments, employees,
//!   performance reviews, projects, project time logs)
//! - Report row types produced by the report query engine
//! - Filter value types (`Department`, `MonthRange`, `DateRange`, `ScoreThreshold`)
//!   with their defaulting rules
//! - `ReportKind`, the catalogue of report views
//! - Presentation helpers for dates and numbers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filters;
pub mod format;
pub mod reports;
