//! Report query service.
//!
//! `ReportService` wraps `ReportDb` and the evaluation date used by the
//! time-relative reports (headcount, tenure). Each report query lives in its
//! own file under `reports/` as an `impl ReportService` block.

use chrono::{Local, NaiveDate};

use crate::ReportDb;

/// Source of "today" for time-relative reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsOf {
    /// The local calendar date at query time.
    #[default]
    Today,
    /// A pinned date, for reproducible output.
    Fixed(NaiveDate),
}

impl AsOf {
    #[must_use]
    pub fn resolve(self) -> NaiveDate {
        match self {
            Self::Today => Local::now().date_naive(),
            Self::Fixed(date) => date,
        }
    }
}

impl From<Option<NaiveDate>> for AsOf {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Today, Self::Fixed)
    }
}

/// Read-only query surface over the HR store.
pub struct ReportService {
    db: ReportDb,
    as_of: AsOf,
}

impl ReportService {
    #[must_use]
    pub const fn new(db: ReportDb, as_of: AsOf) -> Self {
        Self { db, as_of }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ReportDb {
        &self.db
    }

    #[must_use]
    pub const fn as_of(&self) -> AsOf {
        self.as_of
    }

    /// Evaluation date bound into time-relative queries.
    pub(crate) fn today(&self) -> String {
        self.as_of.resolve().to_string()
    }
}
