//! Gateway error definitions.

use thiserror::Error;

/// Errors surfaced by gateway operations.
///
/// Deduplicated callers all observe the same settled outcome, so every
/// variant is `Clone` (transport errors are carried as rendered strings
/// rather than wrapping the non-cloneable source error).
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Transport could not complete, after the single retry where one applies.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx response. Never retried;
    /// status and body are passed through intact.
    #[error("api error: status {status}: {body}")]
    Api { status: u16, body: String },

    /// A principal is active but minting its token failed.
    /// The request was never dispatched.
    #[error("credential error: {0}")]
    Credential(String),

    /// The request could not be constructed (URL join or body serialization).
    #[error("invalid request: {0}")]
    Request(String),

    /// A 2xx response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Status code of an application-level error response, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
