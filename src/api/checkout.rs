//! Checkout operations.

use serde::Serialize;
use serde_json::Value;

use crate::error::GatewayResult;
use crate::gateway::Gateway;

impl Gateway {
    /// `POST /checkout/create-checkout-session` — never retried; an
    /// ambiguous transport failure must not open two payment sessions
    pub async fn create_checkout_session<T>(&self, session: &T) -> GatewayResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.post(&["checkout", "create-checkout-session"], session)
            .await
    }
}
