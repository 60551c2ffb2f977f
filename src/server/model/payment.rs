//! Payment gateway request and confirmation models.

use serde::{Deserialize, Serialize};

/// Payment authorization submitted by the client, to be confirmed with the gateway.
///
/// Serialized as the body of the gateway's confirm call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub payment_key: String,
    pub order_id: String,
    pub amount: i64,
}

/// Payment confirmed by the gateway.
///
/// Every persisted reservation carries one of these.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub payment_key: String,
    pub order_id: String,
    #[serde(rename = "totalAmount")]
    pub amount: i64,
}
