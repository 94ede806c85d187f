//! Request mediation core.
//!
//! # Data Flow
//! ```text
//! api method
//!     → client.rs (build request: URL join, x-request-id, bearer token)
//!     → dedup.rs (designated reads: collapse onto any in-flight twin)
//!     → reqwest dispatch
//!     → transport failure on an idempotent method:
//!           retry.rs classifies → one fixed-delay resend
//!     → 2xx: JSON body | non-2xx: GatewayError::Api, never retried
//! ```
//!
//! # Design Decisions
//! - The in-flight map is owned by the Gateway instance, not a global;
//!   independent gateways never collapse onto each other
//! - Terminal states are success or failure; no recovery inside the
//!   gateway beyond the single retry

pub mod client;
pub mod dedup;
pub mod retry;

pub use client::Gateway;
pub use dedup::InflightMap;
