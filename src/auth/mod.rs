//! Credential attachment seam.
//!
//! # Data Flow
//! ```text
//! Gateway call
//!     → provider.current_principal()
//!     → Some(principal): provider.mint_token() → Authorization: Bearer <token>
//!     → None: request dispatched unauthenticated
//! ```
//!
//! # Design Decisions
//! - The provider is an explicit constructor dependency, never an
//!   ambient singleton, so tests can swap in fakes
//! - Tokens are short-lived and minted fresh per call; the gateway
//!   never stores one

pub mod provider;

pub use provider::{
    BearerToken, CredentialError, CredentialProvider, Principal, StaticTokenProvider,
    Unauthenticated,
};
