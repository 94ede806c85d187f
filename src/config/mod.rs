//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → consumed by Gateway::new
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Config is immutable once the gateway is constructed

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{GatewayConfig, RetryConfig};
