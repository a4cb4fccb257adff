//! robots.txt `Sitemap:` directive strategy

use crate::fetcher::{fetch_url, FetchResult};
use crate::strategy::DetectionStrategy;
use reqwest::Client;
use url::Url;

const SITEMAP_DIRECTIVE: &str = "sitemap:";

/// Finds sitemaps listed in the site's robots.txt
#[derive(Debug, Clone)]
pub struct RobotsTxtStrategy {
    client: Client,
}

impl RobotsTxtStrategy {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl DetectionStrategy for RobotsTxtStrategy {
    fn name(&self) -> &'static str {
        "robots-txt"
    }

    async fn detect(&self, url: &str) -> Vec<String> {
        let Some(robots) = robots_url(url) else {
            tracing::warn!("Cannot build robots.txt URL from {}", url);
            return Vec::new();
        };

        match fetch_url(&self.client, &robots).await {
            FetchResult::Success {
                status_code: 200,
                body,
                ..
            } => {
                let sitemaps = parse_sitemap_directives(&body);
                tracing::debug!("{} lists {} sitemap(s)", robots, sitemaps.len());
                sitemaps
            }
            FetchResult::Success { status_code, .. } | FetchResult::HttpError { status_code } => {
                tracing::debug!("robots.txt at {} returned HTTP {}", robots, status_code);
                Vec::new()
            }
            FetchResult::NetworkError { error } => {
                tracing::warn!("Failed to fetch robots.txt at {}: {}", robots, error);
                Vec::new()
            }
        }
    }
}

/// Resolves `/robots.txt` against the site's origin
///
/// Any path, query or fragment on the input is discarded. Returns `None` when
/// `url` is not an absolute URL.
///
/// # Example
///
/// ```
/// use sitemap_detector::strategy::robots_url;
///
/// assert_eq!(
///     robots_url("https://example.com/blog/post?id=1").as_deref(),
///     Some("https://example.com/robots.txt")
/// );
/// ```
pub fn robots_url(url: &str) -> Option<String> {
    let base = Url::parse(url).ok()?;
    base.join("/robots.txt").ok().map(|u| u.to_string())
}

/// Extracts the values of `Sitemap:` lines from robots.txt content
///
/// The directive name is matched case-insensitively at the very start of the
/// line; the value is everything after the first colon, trimmed. File order
/// and duplicates are kept.
pub fn parse_sitemap_directives(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let prefix = line.get(..SITEMAP_DIRECTIVE.len())?;
            if !prefix.eq_ignore_ascii_case(SITEMAP_DIRECTIVE) {
                return None;
            }
            Some(line[SITEMAP_DIRECTIVE.len()..].trim().to_string())
        })
        .collect()
}
