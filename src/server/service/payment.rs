//! Payment gateway adapter.
//!
//! `PaymentClient` is the seam the reservation flow charges through. The
//! production implementation speaks the Toss Payments HTTP API; tests swap in a
//! stub.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::server::{
    error::payment::PaymentError,
    model::payment::{PaymentInfo, PaymentRequest},
};

/// Confirms and voids payments with an external gateway.
///
/// Each call is a single attempt; callers decide what a failure means.
#[async_trait]
pub trait PaymentClient: Send + Sync {
    /// Confirms a client-side authorization, capturing the charge.
    async fn confirm(&self, request: &PaymentRequest) -> Result<PaymentInfo, PaymentError>;

    /// Voids a previously confirmed payment.
    async fn cancel(&self, payment_key: &str, reason: &str) -> Result<(), PaymentError>;
}

/// Toss Payments client authenticated with the merchant secret key.
pub struct TossPaymentClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct TossErrorBody {
    code: String,
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CancelBody<'a> {
    cancel_reason: &'a str,
}

impl TossPaymentClient {
    /// Creates a client for the gateway at `base_url`, e.g. `https://api.tosspayments.com`.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret_key: secret_key.into(),
        }
    }

    /// Turns a non-success response into `PaymentError::Declined`.
    async fn error_from(response: reqwest::Response) -> PaymentError {
        let status = response.status();

        match response.json::<TossErrorBody>().await {
            Ok(body) => PaymentError::Declined {
                code: body.code,
                message: body.message,
            },
            Err(err) => {
                tracing::warn!("Unreadable payment gateway error body ({}): {}", status, err);
                PaymentError::Request(err)
            }
        }
    }
}

#[async_trait]
impl PaymentClient for TossPaymentClient {
    async fn confirm(&self, request: &PaymentRequest) -> Result<PaymentInfo, PaymentError> {
        let response = self
            .http
            .post(format!("{}/v1/payments/confirm", self.base_url))
            .basic_auth(&self.secret_key, None::<&str>)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let info = response.json::<PaymentInfo>().await?;

        tracing::info!(
            "Confirmed payment {} for order {}",
            info.payment_key,
            info.order_id
        );

        Ok(info)
    }

    async fn cancel(&self, payment_key: &str, reason: &str) -> Result<(), PaymentError> {
        let response = self
            .http
            .post(format!("{}/v1/payments/{}/cancel", self.base_url, payment_key))
            .basic_auth(&self.secret_key, None::<&str>)
            .json(&CancelBody {
                cancel_reason: reason,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        tracing::info!("Cancelled payment {}", payment_key);

        Ok(())
    }
}
