//! Watchlist operations.

use serde::Serialize;
use serde_json::Value;

use crate::error::GatewayResult;
use crate::gateway::Gateway;

impl Gateway {
    /// `GET /watchlist`
    pub async fn all_watchlist(&self) -> GatewayResult<Value> {
        self.get(&["watchlist"]).await
    }

    /// `GET /watchlist/{id}`
    pub async fn watchlist_by_id(&self, id: &str) -> GatewayResult<Value> {
        self.get(&["watchlist", id]).await
    }

    /// `POST /watchlist`
    pub async fn create_watchlist_item<T>(&self, item: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.post(&["watchlist"], item).await
    }

    /// `DELETE /watchlist/{id}`
    pub async fn delete_watchlist_item(&self, id: &str) -> GatewayResult<Value> {
        self.delete(&["watchlist", id]).await
    }

    /// `GET /watchlist/user/{uid}`
    pub async fn user_watchlist(&self, uid: &str) -> GatewayResult<Value> {
        self.get(&["watchlist", "user", uid]).await
    }
}
