//! Product operations.

use serde::Serialize;
use serde_json::Value;

use crate::error::GatewayResult;
use crate::gateway::Gateway;

impl Gateway {
    /// `GET /products`
    pub async fn all_products(&self) -> GatewayResult<Value> {
        self.get(&["products"]).await
    }

    /// `GET /products/approved`
    pub async fn approved_products(&self) -> GatewayResult<Value> {
        self.get(&["products", "approved"]).await
    }

    /// `GET /products/{id}`
    pub async fn product_by_id(&self, id: &str) -> GatewayResult<Value> {
        self.get(&["products", id]).await
    }

    /// `POST /products`
    pub async fn create_product<T>(&self, product: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.post(&["products"], product).await
    }

    /// `PUT /products/{id}`
    pub async fn update_product<T>(&self, id: &str, product: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.put(&["products", id], product).await
    }

    /// `DELETE /products/{id}`
    pub async fn delete_product(&self, id: &str) -> GatewayResult<Value> {
        self.delete(&["products", id]).await
    }

    /// `GET /products/{id}/prices`
    pub async fn product_price_history(&self, id: &str) -> GatewayResult<Value> {
        self.get(&["products", id, "prices"]).await
    }

    /// `GET /products/vendor/{uid}`
    pub async fn vendor_products(&self, uid: &str) -> GatewayResult<Value> {
        self.get(&["products", "vendor", uid]).await
    }

    /// `GET /products/{id}/reviews`
    pub async fn product_reviews(&self, id: &str) -> GatewayResult<Value> {
        self.get(&["products", id, "reviews"]).await
    }

    /// `POST /products/{id}/reviews`
    pub async fn add_product_review<T>(&self, id: &str, review: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.post(&["products", id, "reviews"], review).await
    }

    /// `PUT /products/{id}/reviews/{index}`
    pub async fn update_product_review<T>(
        &self,
        id: &str,
        review_index: u32,
        review: &T,
    ) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.put(&["products", id, "reviews", &review_index.to_string()], review)
            .await
    }

    /// `DELETE /products/{id}/reviews/{index}` (the backend expects the
    /// reviewer identity in the request body)
    pub async fn delete_product_review<T>(
        &self,
        id: &str,
        review_index: u32,
        reviewer: &T,
    ) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.delete_json(&["products", id, "reviews", &review_index.to_string()], reviewer)
            .await
    }
}
