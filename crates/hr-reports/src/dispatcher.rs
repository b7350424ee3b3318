//! Report dispatch: request → resolved filters → query → table.
//!
//! The dispatcher applies each report's filter applicability (see
//! [`ReportKind::uses_months`] and [`ReportKind::uses_threshold`]), fills in
//! configured defaults for missing filters, and routes the call through the
//! result cache.

use std::sync::Arc;

use hr_config::{ConfigError, HrConfig, ReportConfig};
use hr_core::enums::{Department, ReportKind};
use hr_core::errors::CoreError;
use hr_core::filters::{DateRange, MonthRange, ScoreThreshold};
use hr_db::service::ReportService;

use crate::cache::{CacheStats, ReportKey, ResultCache};
use crate::error::ReportError;
use crate::export::{ExportFormat, file_name};
use crate::table::ReportTable;

/// What an analyst asked for. Filters are optional; unset ones fall back to
/// [`ReportDefaults`] when the report uses them and are ignored otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    pub kind: ReportKind,
    pub department: Department,
    pub months: Option<MonthRange>,
    pub threshold: Option<ScoreThreshold>,
}

impl ReportRequest {
    #[must_use]
    pub const fn new(kind: ReportKind, department: Department) -> Self {
        Self {
            kind,
            department,
            months: None,
            threshold: None,
        }
    }

    #[must_use]
    pub const fn with_months(mut self, months: MonthRange) -> Self {
        self.months = Some(months);
        self
    }

    #[must_use]
    pub const fn with_threshold(mut self, threshold: ScoreThreshold) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// Filter values used when a request leaves them unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDefaults {
    pub months: MonthRange,
    pub threshold: ScoreThreshold,
}

impl TryFrom<&ReportConfig> for ReportDefaults {
    type Error = ConfigError;

    fn try_from(config: &ReportConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            months: config.default_months()?,
            threshold: config.threshold()?,
        })
    }
}

/// A request with defaults applied and inapplicable filters dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub key: ReportKey,
    /// Month range the `key.range` was expanded from, for file naming.
    pub months: Option<MonthRange>,
}

impl ResolvedRequest {
    #[must_use]
    pub fn file_name(&self, format: ExportFormat) -> String {
        file_name(self.key.kind, self.key.department, self.months, format)
    }
}

pub struct ReportDispatcher {
    service: ReportService,
    cache: Option<ResultCache>,
    defaults: ReportDefaults,
}

impl ReportDispatcher {
    #[must_use]
    pub fn new(service: ReportService, defaults: ReportDefaults, cache_enabled: bool) -> Self {
        Self {
            service,
            cache: cache_enabled.then(ResultCache::new),
            defaults,
        }
    }

    /// Build from loaded configuration (`report` defaults and `cache.enabled`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the report defaults do not parse.
    pub fn from_config(service: ReportService, config: &HrConfig) -> Result<Self, ConfigError> {
        let defaults = ReportDefaults::try_from(&config.report)?;
        Ok(Self::new(service, defaults, config.cache.enabled))
    }

    #[must_use]
    pub const fn service(&self) -> &ReportService {
        &self.service
    }

    #[must_use]
    pub const fn defaults(&self) -> ReportDefaults {
        self.defaults
    }

    #[must_use]
    pub fn resolve(&self, request: &ReportRequest) -> ResolvedRequest {
        let months = request
            .kind
            .uses_months()
            .then(|| request.months.unwrap_or(self.defaults.months));
        let threshold = request
            .kind
            .uses_threshold()
            .then(|| request.threshold.unwrap_or(self.defaults.threshold));
        ResolvedRequest {
            key: ReportKey {
                kind: request.kind,
                department: request.department,
                range: months.map(|m| m.to_date_range()),
                threshold,
            },
            months,
        }
    }

    /// Produce the table for `request`, from the cache when enabled.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::StoreUnavailable` if the store query fails.
    pub async fn run(&self, request: &ReportRequest) -> Result<Arc<ReportTable>, ReportError> {
        let key = self.resolve(request).key;
        let result = match &self.cache {
            Some(cache) => cache.get_or_try_insert(key, || self.compute(key)).await,
            None => self.compute(key).await.map(Arc::new),
        };
        if let Err(e) = &result {
            if e.is_store_unavailable() {
                tracing::warn!(kind = %key.kind, department = %key.department, error = %e, "report unavailable");
            }
        }
        result
    }

    /// Run the query behind `key`, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::StoreUnavailable` if the store query fails, or
    /// `ReportError::InvalidRequest` if `key` lacks a range its report needs.
    pub async fn compute(&self, key: ReportKey) -> Result<ReportTable, ReportError> {
        let svc = &self.service;
        let dept = key.department;
        let table = match key.kind {
            ReportKind::PerformanceTrends => ReportTable::from_rows(
                key.kind,
                svc.performance_trends(dept, key.range, key.threshold.unwrap_or_default())
                    .await?,
            ),
            ReportKind::DepartmentPerformance => ReportTable::from_rows(
                key.kind,
                svc.department_performance(dept).await?.into_iter().collect(),
            ),
            ReportKind::Attrition => {
                ReportTable::from_rows(key.kind, svc.attrition_rate(dept, required_range(&key)?).await?)
            }
            ReportKind::DepartmentLoad => {
                ReportTable::from_rows(key.kind, svc.department_load(dept, required_range(&key)?).await?)
            }
            ReportKind::TenureLadder => ReportTable::from_rows(key.kind, svc.tenure_ladder(dept).await?),
            ReportKind::ProjectOverlap => {
                ReportTable::from_rows(key.kind, svc.project_overlap(dept).await?)
            }
            ReportKind::ProjectTimelines => {
                ReportTable::from_rows(key.kind, svc.project_timelines(dept).await?)
            }
        };
        tracing::debug!(kind = %key.kind, department = %dept, rows = table.len(), "report computed");
        Ok(table)
    }

    /// Cache counters, or `None` when caching is disabled.
    #[must_use]
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ResultCache::stats)
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

fn required_range(key: &ReportKey) -> Result<DateRange, CoreError> {
    key.range.ok_or_else(|| {
        CoreError::Validation(format!("report '{}' requires a date range", key.kind))
    })
}
