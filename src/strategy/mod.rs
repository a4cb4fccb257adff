//! Sitemap detection strategies
//!
//! Each strategy is one heuristic for finding the sitemap URLs a site
//! publishes. A strategy never fails: any upstream problem is logged and
//! reported as an empty list, so the detector can move on to the next one.

mod link_tags;
mod robots;
mod well_known;

pub use link_tags::extract_sitemap_links;
pub use robots::{parse_sitemap_directives, robots_url, RobotsTxtStrategy};
pub use well_known::{candidate_urls, WellKnownStrategy, WELL_KNOWN_PATHS};

use reqwest::Client;
use std::sync::Arc;

/// One heuristic for discovering sitemap URLs from a site
#[async_trait::async_trait]
pub trait DetectionStrategy: Send + Sync {
    /// Short identifier used in log output
    fn name(&self) -> &'static str;

    /// Returns the sitemap URLs found for `url`, or an empty list
    async fn detect(&self, url: &str) -> Vec<String>;
}

/// The production strategy chain, in priority order
///
/// robots.txt is consulted first; only when it yields nothing are the
/// well-known paths and the page's link tags tried.
pub fn default_strategies(client: Client) -> Vec<Arc<dyn DetectionStrategy>> {
    vec![
        Arc::new(RobotsTxtStrategy::new(client.clone())),
        Arc::new(WellKnownStrategy::new(client)),
    ]
}
