use crate::config::types::{CacheConfig, Config, HttpConfig, ServerConfig};
use crate::ConfigError;
use std::net::IpAddr;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_http_config(&config.http)?;
    validate_cache_config(&config.cache)?;
    Ok(())
}

/// Validates listener configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config
        .host
        .parse::<IpAddr>()
        .map_err(|e| ConfigError::InvalidValue {
            field: "server.host",
            message: format!("'{}' is not an IP address: {}", config.host, e),
        })?;

    if config.port == 0 {
        return Err(ConfigError::Validation(
            "server.port must be between 1 and 65535".to_string(),
        ));
    }

    Ok(())
}

/// Validates outbound HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "http.timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "http.connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "http.connect-timeout-secs ({}) cannot exceed http.timeout-secs ({})",
            config.connect_timeout_secs, config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "http.user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates cache configuration
fn validate_cache_config(config: &CacheConfig) -> Result<(), ConfigError> {
    if config.max_entries < 1 {
        return Err(ConfigError::Validation(format!(
            "cache.max-entries must be >= 1, got {}",
            config.max_entries
        )));
    }

    if config.ttl_secs == Some(0) {
        return Err(ConfigError::Validation(
            "cache.ttl-secs must be >= 1 when set (omit it to disable expiry)".to_string(),
        ));
    }

    Ok(())
}
