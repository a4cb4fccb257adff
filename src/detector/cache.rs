//! Detection result cache
//!
//! A bounded, thread-safe map from the raw input URL to its resolved sitemap
//! list, backed by `moka`. Concurrent lookups for the same missing key are
//! coalesced, so the detection chain runs once per URL.

use crate::config::CacheConfig;
use moka::future::Cache;
use moka::policy::EvictionPolicy;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Cached sitemap lists keyed by the exact URL string
#[derive(Clone)]
pub struct SitemapCache {
    entries: Cache<String, Arc<Vec<String>>>,
}

impl SitemapCache {
    /// Creates a cache holding at most `max_entries` URLs
    ///
    /// Every new URL is admitted; once full, the least recently used entry
    /// makes room. With `ttl` set, an entry is dropped that long after it was
    /// inserted; without it, entries live until evicted for space.
    pub fn new(max_entries: u64, ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder()
            .max_capacity(max_entries)
            .eviction_policy(EvictionPolicy::lru());
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            entries: builder.build(),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries, config.ttl())
    }

    /// Returns the cached list for `url`, if any
    pub async fn get(&self, url: &str) -> Option<Arc<Vec<String>>> {
        self.entries.get(url).await
    }

    /// Returns the cached list for `url`, running `detect` to fill it when absent
    ///
    /// `detect` is only awaited by one caller per key; others wait for its
    /// result instead of starting their own.
    pub async fn get_or_detect<F>(&self, url: &str, detect: F) -> Arc<Vec<String>>
    where
        F: Future<Output = Vec<String>>,
    {
        self.entries
            .get_with(url.to_string(), async move { Arc::new(detect.await) })
            .await
    }

    /// Number of cached URLs
    ///
    /// moka applies inserts and evictions lazily; call
    /// [`run_pending_tasks`](Self::run_pending_tasks) first for an exact count.
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    pub async fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks().await;
    }
}

impl std::fmt::Debug for SitemapCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SitemapCache")
            .field("entry_count", &self.entries.entry_count())
            .field("max_capacity", &self.entries.policy().max_capacity())
            .finish()
    }
}
