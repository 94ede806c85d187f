//! In-flight request deduplication.
//!
//! # Responsibilities
//! - Guarantee at most one underlying dispatch per key at any time
//! - Hand every concurrent caller for a key the same settled outcome
//! - Drop the entry the moment the outcome is known
//!
//! # Design Decisions
//! - Pure in-flight collapse: no TTL, no staleness window, no
//!   invalidation beyond "request completed"
//! - Entry removal happens inside the shared future, so it runs exactly
//!   once regardless of how many callers are attached

use std::future::Future;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures_util::future::{BoxFuture, Shared};
use futures_util::FutureExt;
use serde_json::Value;

use crate::error::GatewayResult;

type SharedCall = Shared<BoxFuture<'static, GatewayResult<Value>>>;

/// Map of deduplication key to the in-flight call for that key.
///
/// Cloning shares the underlying map; the gateway and the futures it
/// spawns all observe the same pending set.
#[derive(Clone, Default)]
pub struct InflightMap {
    inner: Arc<DashMap<String, SharedCall>>,
}

impl InflightMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `dispatch` under `key`, collapsing onto an in-flight twin.
    ///
    /// The first caller for a key inserts and drives the dispatch; any
    /// caller arriving while it is pending awaits the same shared future
    /// and observes the identical value or error. Once settled the key is
    /// removed, so the next call dispatches fresh.
    pub async fn collapse<F>(&self, key: &str, dispatch: F) -> GatewayResult<Value>
    where
        F: Future<Output = GatewayResult<Value>> + Send + 'static,
    {
        let call = match self.inner.entry(key.to_string()) {
            Entry::Occupied(slot) => {
                tracing::debug!(key = %key, "collapsing onto in-flight request");
                slot.get().clone()
            }
            Entry::Vacant(slot) => {
                let map = self.inner.clone();
                let owned_key = key.to_string();
                let call = async move {
                    let outcome = dispatch.await;
                    map.remove(&owned_key);
                    outcome
                }
                .boxed()
                .shared();
                slot.insert(call.clone());
                call
            }
        };

        call.await
    }

    /// Number of keys currently in flight.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for InflightMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InflightMap").field("pending", &self.len()).finish()
    }
}
