//! Well-known path checks and HTML link-tag strategy

use crate::fetcher::{check_url, fetch_url, FetchResult};
use crate::strategy::{extract_sitemap_links, DetectionStrategy};
use reqwest::{Client, StatusCode};

/// Conventional sitemap locations, tried in this order
pub const WELL_KNOWN_PATHS: [&str; 3] = ["/sitemap.xml", "/sitemap_index.xml", "/sitemap1.xml"];

/// Checks conventional sitemap paths, then scrapes the page's link tags
///
/// Results from both phases are concatenated: well-known hits first, then
/// `<link rel="sitemap">` hrefs.
#[derive(Debug, Clone)]
pub struct WellKnownStrategy {
    client: Client,
}

impl WellKnownStrategy {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Phase 1: every candidate answering exactly 200
    async fn check_well_known(&self, url: &str) -> Vec<String> {
        let mut found = Vec::new();

        for candidate in candidate_urls(url) {
            match check_url(&self.client, &candidate).await {
                Ok(StatusCode::OK) => found.push(candidate),
                Ok(status) => {
                    tracing::debug!("Sitemap candidate {} returned HTTP {}", candidate, status);
                }
                Err(error) => {
                    tracing::warn!("Failed to check sitemap at {}: {}", candidate, error);
                }
            }
        }

        found
    }

    /// Phase 2: `<link rel="sitemap">` hrefs from the page itself
    async fn scrape_link_tags(&self, url: &str) -> Vec<String> {
        match fetch_url(&self.client, url).await {
            FetchResult::Success { body, .. } => extract_sitemap_links(&body),
            FetchResult::HttpError { status_code } => {
                tracing::warn!("Failed to fetch page {} for link tags: HTTP {}", url, status_code);
                Vec::new()
            }
            FetchResult::NetworkError { error } => {
                tracing::warn!("Failed to fetch page {} for link tags: {}", url, error);
                Vec::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl DetectionStrategy for WellKnownStrategy {
    fn name(&self) -> &'static str {
        "well-known"
    }

    async fn detect(&self, url: &str) -> Vec<String> {
        let mut sitemaps = self.check_well_known(url).await;
        sitemaps.extend(self.scrape_link_tags(url).await);
        sitemaps
    }
}

/// Builds the candidate URLs by appending each well-known path to `url`
///
/// Trailing slashes are stripped first; nothing else about the input is
/// altered.
///
/// # Example
///
/// ```
/// use sitemap_detector::strategy::candidate_urls;
///
/// assert_eq!(
///     candidate_urls("https://example.com/")[0],
///     "https://example.com/sitemap.xml"
/// );
/// ```
pub fn candidate_urls(url: &str) -> Vec<String> {
    let base = url.trim_end_matches('/');
    WELL_KNOWN_PATHS
        .iter()
        .map(|path| format!("{}{}", base, path))
        .collect()
}
