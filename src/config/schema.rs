//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the Local Market Tracker REST backend,
    /// including the `/api` prefix.
    pub base_url: String,

    /// Per-request deadline in seconds. A hung remote call fails with a
    /// transport error once this elapses instead of hanging the caller.
    pub request_timeout_secs: u64,

    /// Transient-failure retry settings.
    pub retry: RetryConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://backend-xi-seven-28.vercel.app/api".to_string(),
            request_timeout_secs: 30,
            retry: RetryConfig::default(),
        }
    }
}

/// Retry configuration.
///
/// The gateway resends a request at most once, after a fixed delay, and
/// only when the failure was transport-level and the method idempotent.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Whether the single retry is performed at all.
    pub enabled: bool,

    /// Fixed delay before the retry, in milliseconds.
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: 2_000,
        }
    }
}
