//! Credential provider trait and stock implementations.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use thiserror::Error;

/// An authenticated principal known to the external identity provider.
///
/// Carries the provider-assigned uid; the gateway treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Principal {
    uid: String,
}

impl Principal {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }
}

/// A short-lived bearer token minted for the current principal.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens must not leak into logs.
impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(..)")
    }
}

/// Errors from the external identity provider.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    /// No principal is signed in; a token cannot be minted.
    #[error("no active principal")]
    NoPrincipal,

    /// The provider failed to mint a token for the active principal.
    #[error("token mint failed: {0}")]
    Mint(String),
}

/// Source of the current principal and its short-lived tokens.
///
/// The gateway consults this per outbound call: the principal check is
/// synchronous, the mint is asynchronous and fails if no principal is
/// active. Implementations wrap whatever identity provider the embedding
/// application uses.
pub trait CredentialProvider: Send + Sync {
    /// The currently signed-in principal, if any.
    fn current_principal(&self) -> Option<Principal>;

    /// Mint a fresh short-lived token for the current principal.
    fn mint_token(&self) -> BoxFuture<'_, Result<BearerToken, CredentialError>>;
}

/// Provider with no principal. Requests go out unauthenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unauthenticated;

impl CredentialProvider for Unauthenticated {
    fn current_principal(&self) -> Option<Principal> {
        None
    }

    fn mint_token(&self) -> BoxFuture<'_, Result<BearerToken, CredentialError>> {
        async { Err(CredentialError::NoPrincipal) }.boxed()
    }
}

/// Provider backed by a fixed principal and token.
///
/// Suited to service credentials and tests; a real identity-provider
/// integration would mint a different token on every call.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    principal: Principal,
    token: BearerToken,
}

impl StaticTokenProvider {
    pub fn new(uid: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            principal: Principal::new(uid),
            token: BearerToken::new(token),
        }
    }
}

impl CredentialProvider for StaticTokenProvider {
    fn current_principal(&self) -> Option<Principal> {
        Some(self.principal.clone())
    }

    fn mint_token(&self) -> BoxFuture<'_, Result<BearerToken, CredentialError>> {
        let token = self.token.clone();
        async move { Ok(token) }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unauthenticated_has_no_principal() {
        let provider = Unauthenticated;
        assert!(provider.current_principal().is_none());

        let err = provider.mint_token().await.unwrap_err();
        assert!(matches!(err, CredentialError::NoPrincipal));
    }

    #[tokio::test]
    async fn test_static_provider_mints_its_token() {
        let provider = StaticTokenProvider::new("abc123", "tok-1");
        assert_eq!(provider.current_principal().unwrap().uid(), "abc123");

        let token = provider.mint_token().await.unwrap();
        assert_eq!(token.as_str(), "tok-1");
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = BearerToken::new("very-secret");
        assert_eq!(format!("{:?}", token), "BearerToken(..)");
    }
}
