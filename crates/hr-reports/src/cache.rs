//! Memoized report results.
//!
//! Policy: unbounded, lives as long as the cache value, no invalidation apart
//! from [`ResultCache::clear`]. The store is treated as read-mostly within a
//! session, so a resolved filter tuple always maps to the same table.
//!
//! Each key owns an `OnceCell`: concurrent misses on one key wait for a
//! single computation instead of racing. A failed computation leaves the cell
//! empty, so the next caller retries.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use hr_core::enums::{Department, ReportKind};
use hr_core::filters::{DateRange, ScoreThreshold};
use tokio::sync::OnceCell;

use crate::table::ReportTable;

/// The exact resolved filter tuple of one report invocation.
///
/// Filters that do not apply to `kind` are `None`, so requests differing
/// only in an ignored filter share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportKey {
    pub kind: ReportKind,
    pub department: Department,
    pub range: Option<DateRange>,
    pub threshold: Option<ScoreThreshold>,
}

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Default)]
pub struct ResultCache {
    entries: DashMap<ReportKey, Arc<OnceCell<Arc<ReportTable>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResultCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `key`, computing it with `compute` on a miss.
    ///
    /// # Errors
    ///
    /// Propagates the error from `compute`; nothing is cached in that case.
    pub async fn get_or_try_insert<F, Fut, E>(
        &self,
        key: ReportKey,
        compute: F,
    ) -> Result<Arc<ReportTable>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ReportTable, E>>,
    {
        // Clone the cell out so the shard lock is not held across the await.
        let cell = self.entries.entry(key).or_default().value().clone();

        if let Some(table) = cell.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(kind = %key.kind, department = %key.department, "cache hit");
            return Ok(Arc::clone(table));
        }

        let mut computed = false;
        let table = cell
            .get_or_try_init(|| {
                computed = true;
                async move { compute().await.map(Arc::new) }
            })
            .await?;

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(kind = %key.kind, department = %key.department, "cache miss");
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        Ok(Arc::clone(table))
    }

    /// Cached table for `key`, without computing.
    #[must_use]
    pub fn get(&self, key: &ReportKey) -> Option<Arc<ReportTable>> {
        self.entries
            .get(key)
            .and_then(|cell| cell.get().map(Arc::clone))
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.iter().filter(|e| e.value().initialized()).count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
