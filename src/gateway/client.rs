//! The gateway client.
//!
//! # Responsibilities
//! - Build each outbound request: URL join, request ID, bearer credential
//! - Dispatch with the per-request deadline
//! - Apply the single fixed-delay retry on transport failure
//! - Pass response JSON through untouched; surface every failure
//!
//! # Design Decisions
//! - One `Gateway` instance owns one in-flight map and one credential
//!   provider; cloning shares both
//! - The credential check-and-attach runs per call, never cached,
//!   because tokens expire and must be freshly minted
//! - No logging beyond one diagnostic line on retry

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, Request, Response};
use serde::Serialize;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::auth::CredentialProvider;
use crate::config::{loader::validate_config, GatewayConfig, RetryConfig};
use crate::error::{GatewayError, GatewayResult};
use crate::gateway::dedup::InflightMap;
use crate::gateway::retry::{is_transient, retry_allowed};

/// Header carrying the per-call correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Client for the Local Market Tracker REST backend.
///
/// Cheap to clone; clones share the HTTP connection pool, the credential
/// provider, and the in-flight deduplication map.
#[derive(Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: Url,
    credentials: Arc<dyn CredentialProvider>,
    inflight: InflightMap,
    retry: RetryConfig,
}

impl Gateway {
    /// Create a gateway from a validated config and a credential provider.
    pub fn new(
        config: GatewayConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> GatewayResult<Self> {
        validate_config(&config)
            .map_err(|errors| GatewayError::Request(errors.join(", ")))?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| GatewayError::Request(format!("invalid base URL: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            credentials,
            inflight: InflightMap::new(),
            retry: config.retry,
        })
    }

    /// The backend base URL this gateway talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The in-flight deduplication map (exposed for inspection).
    pub fn inflight(&self) -> &InflightMap {
        &self.inflight
    }

    /// Issue a call, optionally with a JSON body.
    ///
    /// State machine per logical call:
    /// INIT → credential attach → DISPATCHED →
    /// { SETTLED | transient failure → RETRIED → SETTLED }.
    pub(crate) async fn call<T>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&T>,
    ) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;

        let mut builder = self
            .http
            .request(method, url)
            .header(X_REQUEST_ID, Uuid::new_v4().to_string());

        // Policy A: fresh token per call whenever a principal is active.
        if self.credentials.current_principal().is_some() {
            let token = self
                .credentials
                .mint_token()
                .await
                .map_err(|e| GatewayError::Credential(e.to_string()))?;
            builder = builder.bearer_auth(token.as_str());
        }

        if let Some(payload) = body {
            builder = builder.json(payload);
        }

        let request = builder
            .build()
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        self.execute(request).await
    }

    /// Dispatch a built request, resending once on transport failure.
    async fn execute(&self, request: Request) -> GatewayResult<Value> {
        let method = request.method().clone();
        let second = if retry_allowed(&self.retry, &method) {
            request.try_clone()
        } else {
            None
        };

        let err = match self.http.execute(request).await {
            Ok(response) => return decode(response).await,
            Err(err) => err,
        };

        if !is_transient(&err) {
            return Err(GatewayError::Network(err.to_string()));
        }

        let Some(second) = second else {
            return Err(GatewayError::Network(err.to_string()));
        };

        tracing::warn!(
            method = %method,
            error = %err,
            delay_ms = self.retry.delay_ms,
            "transient network failure, retrying once"
        );
        tokio::time::sleep(Duration::from_millis(self.retry.delay_ms)).await;

        match self.http.execute(second).await {
            Ok(response) => decode(response).await,
            Err(err) => Err(GatewayError::Network(err.to_string())),
        }
    }

    /// Collapse a read onto any in-flight twin with the same key.
    pub(crate) async fn deduplicated(
        &self,
        key: String,
        method: Method,
        segments: &[&str],
    ) -> GatewayResult<Value> {
        let gateway = self.clone();
        let segments: Vec<String> = segments.iter().map(|s| s.to_string()).collect();
        self.inflight
            .collapse(&key, async move {
                let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
                gateway.call::<Value>(method, &segments, None).await
            })
            .await
    }

    /// Join path segments onto the base URL.
    fn endpoint(&self, segments: &[&str]) -> GatewayResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Request(format!("base URL '{}' has no path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // Verb helpers for the operation surface in `api/`.

    pub(crate) async fn get(&self, segments: &[&str]) -> GatewayResult<Value> {
        self.call::<Value>(Method::GET, segments, None).await
    }

    pub(crate) async fn post<T>(&self, segments: &[&str], body: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.call(Method::POST, segments, Some(body)).await
    }

    pub(crate) async fn put<T>(&self, segments: &[&str], body: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.call(Method::PUT, segments, Some(body)).await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> GatewayResult<Value> {
        self.call::<Value>(Method::DELETE, segments, None).await
    }

    pub(crate) async fn delete_json<T>(&self, segments: &[&str], body: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.call(Method::DELETE, segments, Some(body)).await
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url.as_str())
            .field("inflight", &self.inflight)
            .field("retry", &self.retry)
            .finish()
    }
}

/// Turn a received response into the pass-through JSON body or an
/// application-level error with status and body intact.
async fn decode(response: Response) -> GatewayResult<Value> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GatewayError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(GatewayError::Api {
            status: status.as_u16(),
            body,
        });
    }

    if body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Unauthenticated;

    fn test_gateway(base_url: &str) -> GatewayResult<Gateway> {
        let config = GatewayConfig {
            base_url: base_url.to_string(),
            ..GatewayConfig::default()
        };
        Gateway::new(config, Arc::new(Unauthenticated))
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = test_gateway("not a url").unwrap_err();
        assert!(matches!(err, GatewayError::Request(_)));
    }

    #[test]
    fn test_endpoint_join() {
        let gateway = test_gateway("http://localhost:5000/api").unwrap();
        let url = gateway.endpoint(&["products", "p1", "prices"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/products/p1/prices");
    }

    #[test]
    fn test_endpoint_join_with_trailing_slash() {
        let gateway = test_gateway("http://localhost:5000/api/").unwrap();
        let url = gateway.endpoint(&["users", "uid", "abc123"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/users/uid/abc123");
    }

    #[test]
    fn test_path_segments_are_escaped() {
        let gateway = test_gateway("http://localhost:5000/api").unwrap();
        let url = gateway.endpoint(&["products", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/products/a%2Fb%20c");
    }
}
