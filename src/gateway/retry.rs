//! Transient-failure retry policy.
//!
//! # Responsibilities
//! - Classify a dispatch failure as transport-level or not
//! - Decide whether a request qualifies for the single resend
//!
//! # Design Decisions
//! - At most one retry per logical call, after a fixed delay
//! - Never retry non-idempotent methods; a duplicated POST can create
//!   duplicate orders server-side
//! - Application-level error responses are not failures here at all:
//!   they reached us, so they are surfaced untouched

use reqwest::Method;

use crate::config::RetryConfig;

/// Whether a dispatch error is transport-level (connect failure, timeout,
/// connection dropped mid-request) as opposed to a received response that
/// the caller must see.
pub fn is_transient(err: &reqwest::Error) -> bool {
    if err.is_status() || err.is_decode() || err.is_redirect() || err.is_builder() {
        return false;
    }
    err.is_connect() || err.is_timeout() || err.is_request()
}

/// Whether this request may be resent at all.
pub fn retry_allowed(config: &RetryConfig, method: &Method) -> bool {
    config.enabled && method.is_idempotent()
}
