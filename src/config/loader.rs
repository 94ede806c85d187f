//! Configuration loading from disk.
//!
//! # Responsibilities
//! - Parse a TOML file into [`GatewayConfig`]
//! - Semantic validation (serde handles syntactic)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the parsed config

use std::fs;
use std::path::Path;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Semantic validation of a parsed config. Collects every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.base_url.is_empty() {
        errors.push("base_url must not be empty".to_string());
    } else {
        match Url::parse(&config.base_url) {
            Ok(url) if url.cannot_be_a_base() => {
                errors.push(format!("base_url '{}' cannot be a base URL", config.base_url));
            }
            Ok(_) => {}
            Err(e) => errors.push(format!("base_url '{}' is invalid: {}", config.base_url, e)),
        }
    }

    if config.request_timeout_secs == 0 {
        errors.push("request_timeout_secs must be greater than zero".to_string());
    }

    if config.retry.enabled && config.retry.delay_ms == 0 {
        errors.push("retry.delay_ms must be greater than zero when retries are enabled".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
