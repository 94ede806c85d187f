//! Order operations.

use serde::Serialize;
use serde_json::Value;

use crate::error::GatewayResult;
use crate::gateway::Gateway;

impl Gateway {
    /// `GET /orders`
    pub async fn all_orders(&self) -> GatewayResult<Value> {
        self.get(&["orders"]).await
    }

    /// `GET /orders/{id}`
    pub async fn order_by_id(&self, id: &str) -> GatewayResult<Value> {
        self.get(&["orders", id]).await
    }

    /// `POST /orders` — never retried; a duplicated resend could place
    /// the order twice
    pub async fn create_order<T>(&self, order: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.post(&["orders"], order).await
    }

    /// `PUT /orders/{id}`
    pub async fn update_order<T>(&self, id: &str, order: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.put(&["orders", id], order).await
    }

    /// `DELETE /orders/{id}`
    pub async fn delete_order(&self, id: &str) -> GatewayResult<Value> {
        self.delete(&["orders", id]).await
    }

    /// `GET /orders/session/{session_id}`
    pub async fn order_by_session(&self, session_id: &str) -> GatewayResult<Value> {
        self.get(&["orders", "session", session_id]).await
    }

    /// `GET /orders/user/{uid}`
    pub async fn user_orders(&self, uid: &str) -> GatewayResult<Value> {
        self.get(&["orders", "user", uid]).await
    }
}
