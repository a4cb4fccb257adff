//! Sitemap detector
//!
//! Runs an ordered chain of [`DetectionStrategy`] values against a URL and
//! keeps the first non-empty answer. Answers, including empty ones, are
//! cached per URL for the lifetime of the process (subject to the cache's
//! size bound and optional time-to-live).

mod cache;

pub use cache::SitemapCache;

use crate::config::Config;
use crate::fetcher::build_http_client;
use crate::strategy::{default_strategies, DetectionStrategy};
use crate::DetectorError;
use std::sync::Arc;

/// Ordered, short-circuiting strategy chain with a per-URL result cache
pub struct SitemapDetector {
    strategies: Vec<Arc<dyn DetectionStrategy>>,
    cache: SitemapCache,
}

impl SitemapDetector {
    /// Creates a detector; `strategies` order is their priority
    pub fn new(strategies: Vec<Arc<dyn DetectionStrategy>>, cache: SitemapCache) -> Self {
        Self { strategies, cache }
    }

    /// Builds the production detector (shared HTTP client, default chain)
    ///
    /// # Returns
    ///
    /// * `Ok(SitemapDetector)` - Ready to serve lookups
    /// * `Err(DetectorError)` - The HTTP client could not be built
    pub fn from_config(config: &Config) -> Result<Self, DetectorError> {
        let client = build_http_client(&config.http)?;
        Ok(Self::new(
            default_strategies(client),
            SitemapCache::from_config(&config.cache),
        ))
    }

    /// Returns the sitemap URLs for `url`
    ///
    /// A cached answer is returned without running any strategy. Otherwise
    /// strategies run in order until one returns a non-empty list; if none
    /// does, the answer is empty. Either way the answer is cached under the
    /// exact `url` string.
    pub async fn detect_sitemap(&self, url: &str) -> Vec<String> {
        if let Some(cached) = self.cache.get(url).await {
            tracing::debug!("Cache hit for {} ({} sitemap(s))", url, cached.len());
            return cached.as_ref().clone();
        }

        let resolved = self.cache.get_or_detect(url, self.run_chain(url)).await;
        tracing::debug!("Cached {} ({} URL(s) cached)", url, self.cache.entry_count());
        resolved.as_ref().clone()
    }

    async fn run_chain(&self, url: &str) -> Vec<String> {
        for strategy in &self.strategies {
            let sitemaps = strategy.detect(url).await;
            if !sitemaps.is_empty() {
                tracing::info!(
                    "Strategy {} found {} sitemap(s) for {}",
                    strategy.name(),
                    sitemaps.len(),
                    url
                );
                return sitemaps;
            }
            tracing::debug!("Strategy {} found nothing for {}", strategy.name(), url);
        }

        tracing::info!("No sitemap found for {}", url);
        Vec::new()
    }
}
