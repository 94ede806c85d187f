//! Advertisement operations.

use serde::Serialize;
use serde_json::Value;

use crate::error::GatewayResult;
use crate::gateway::Gateway;

impl Gateway {
    /// `GET /advertisements`
    pub async fn all_ads(&self) -> GatewayResult<Value> {
        self.get(&["advertisements"]).await
    }

    /// `GET /advertisements/approved`
    pub async fn approved_ads(&self) -> GatewayResult<Value> {
        self.get(&["advertisements", "approved"]).await
    }

    /// `GET /advertisements/{id}`
    pub async fn ad_by_id(&self, id: &str) -> GatewayResult<Value> {
        self.get(&["advertisements", id]).await
    }

    /// `POST /advertisements`
    pub async fn create_ad<T>(&self, ad: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.post(&["advertisements"], ad).await
    }

    /// `PUT /advertisements/{id}`
    pub async fn update_ad<T>(&self, id: &str, ad: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.put(&["advertisements", id], ad).await
    }

    /// `DELETE /advertisements/{id}`
    pub async fn delete_ad(&self, id: &str) -> GatewayResult<Value> {
        self.delete(&["advertisements", id]).await
    }
}
