//! Local Market Tracker API gateway client.
//!
//! A thin mediation layer between application code and the Local Market
//! Tracker REST backend. Every remote operation goes through one
//! [`Gateway`] instance, which enforces three cross-cutting policies:
//!
//! ```text
//! caller
//!     → api/*.rs (one async method per remote operation)
//!     → gateway/client.rs (attach bearer credential, x-request-id)
//!     → gateway/dedup.rs (collapse concurrent identical reads)
//!     → reqwest dispatch
//!     → on transport failure: gateway/retry.rs (one fixed-delay retry)
//!     → JSON body or GatewayError back to the caller
//! ```
//!
//! # Design Decisions
//! - Credentials are minted fresh per call, never cached; tokens expire
//! - Deduplication is a pure in-flight collapse: no TTL, no staleness window
//! - Retries only for idempotent methods; POST is never resent
//! - Every failure reaches the caller; the gateway recovers nothing

pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;

mod api;

pub use auth::{
    BearerToken, CredentialError, CredentialProvider, Principal, StaticTokenProvider,
    Unauthenticated,
};
pub use config::{GatewayConfig, RetryConfig};
pub use error::{GatewayError, GatewayResult};
pub use gateway::Gateway;
