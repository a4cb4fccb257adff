//! Configuration module for Sitemap-Detector
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so running without a file is equivalent to
//! loading an empty one.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_detector::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("detector.toml")).unwrap();
//! println!("Cache holds up to {} URLs", config.cache.max_entries);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CacheConfig, Config, HttpConfig, ServerConfig};

// Re-export parser functions
pub use parser::{
    apply_overrides, compute_config_hash, load_config, load_config_with_hash, parse_config,
};

pub use validation::validate;
