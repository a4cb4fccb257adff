//! HTTP fetcher implementation
//!
//! All outbound requests made by the detection strategies go through this
//! module. Failures are classified into [`FetchResult`] variants instead of
//! being propagated, since every upstream problem degrades to "nothing found".

use crate::config::HttpConfig;
use reqwest::{redirect::Policy, Client, StatusCode};

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// The server answered with a 2xx status
    Success {
        /// HTTP status code
        status_code: u16,
        /// Response body
        body: String,
    },

    /// The server answered with a non-2xx status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, DNS, TLS, body read)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client shared by all strategies
///
/// # Example
///
/// ```no_run
/// use sitemap_detector::config::HttpConfig;
/// use sitemap_detector::fetcher::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and reads its body
///
/// No retries: a single attempt is made and its outcome classified.
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: describe_error(&e),
                },
            }
        }
        Err(e) => FetchResult::NetworkError {
            error: describe_error(&e),
        },
    }
}

/// Sends a GET and reports only the response status, leaving the body unread
///
/// # Returns
///
/// * `Ok(StatusCode)` - The server responded
/// * `Err(String)` - Transport failure description
pub async fn check_url(client: &Client, url: &str) -> Result<StatusCode, String> {
    client
        .get(url)
        .send()
        .await
        .map(|response| response.status())
        .map_err(|e| describe_error(&e))
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("Request timeout: {}", e)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_redirect() {
        format!("Redirect error: {}", e)
    } else {
        e.to_string()
    }
}
