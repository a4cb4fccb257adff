//! Sitemap-Detector: finds the sitemap(s) a website publishes
//!
//! This crate exposes an HTTP service that, given a site URL, tries a chain of
//! detection strategies (robots.txt, well-known paths, `<link rel="sitemap">`)
//! and returns the first non-empty answer, caching results per URL.

pub mod config;
pub mod detector;
pub mod fetcher;
pub mod server;
pub mod strategy;

use thiserror::Error;

/// Main error type for Sitemap-Detector operations
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid listen address {address}: {message}")]
    ListenAddress { address: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Result type alias for Sitemap-Detector operations
pub type Result<T> = std::result::Result<T, DetectorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use detector::SitemapDetector;
pub use strategy::{default_strategies, DetectionStrategy, RobotsTxtStrategy, WellKnownStrategy};
