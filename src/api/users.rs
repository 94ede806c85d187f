//! User and role-request operations.

use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::GatewayResult;
use crate::gateway::Gateway;

impl Gateway {
    /// `POST /users/sync` — mirror the identity-provider user into the
    /// backend store
    pub async fn sync_user<T>(&self, user: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.post(&["users", "sync"], user).await
    }

    /// `GET /users/uid/{uid}`, deduplicated.
    ///
    /// Dashboards fan this out from several widgets at mount; concurrent
    /// calls for the same uid collapse onto one dispatch and all observe
    /// the same outcome.
    pub async fn user_by_uid(&self, uid: &str) -> GatewayResult<Value> {
        let key = format!("getUserByUid:{uid}");
        self.deduplicated(key, Method::GET, &["users", "uid", uid])
            .await
    }

    /// `PUT /users/profile/update`
    pub async fn update_user_profile<T>(&self, profile: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.put(&["users", "profile", "update"], profile).await
    }

    /// `POST /users/change-password`
    pub async fn change_password(&self, new_password: &str) -> GatewayResult<Value> {
        self.post(&["users", "change-password"], &json!({ "newPassword": new_password }))
            .await
    }

    /// `GET /users`
    pub async fn all_users(&self) -> GatewayResult<Value> {
        self.get(&["users"]).await
    }

    /// `PUT /users/{id}`
    pub async fn update_user<T>(&self, id: &str, data: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.put(&["users", id], data).await
    }

    /// `POST /users/request-vendor`
    pub async fn request_vendor(&self, uid: &str) -> GatewayResult<Value> {
        self.post(&["users", "request-vendor"], &json!({ "uid": uid }))
            .await
    }

    /// `GET /users/vendor-requests`
    pub async fn pending_vendor_requests(&self) -> GatewayResult<Value> {
        self.get(&["users", "vendor-requests"]).await
    }

    /// `POST /users/vendor-requests/{id}` with an `approve`/`reject` action
    pub async fn respond_vendor_request(&self, id: &str, action: &str) -> GatewayResult<Value> {
        self.post(&["users", "vendor-requests", id], &json!({ "action": action }))
            .await
    }

    /// `POST /users/request-admin`
    pub async fn request_admin(&self, uid: &str) -> GatewayResult<Value> {
        self.post(&["users", "request-admin"], &json!({ "uid": uid }))
            .await
    }

    /// `GET /users/admin-requests`
    pub async fn pending_admin_requests(&self) -> GatewayResult<Value> {
        self.get(&["users", "admin-requests"]).await
    }

    /// `POST /users/admin-requests/{id}` with an `approve`/`reject` action
    pub async fn respond_admin_request(&self, id: &str, action: &str) -> GatewayResult<Value> {
        self.post(&["users", "admin-requests", id], &json!({ "action": action }))
            .await
    }
}
