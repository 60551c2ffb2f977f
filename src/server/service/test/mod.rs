//! Service tests against in-memory SQLite with a stub payment gateway.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::server::{
    error::payment::PaymentError,
    model::payment::{PaymentInfo, PaymentRequest},
    service::payment::PaymentClient,
};


/// Gateway stand-in that approves every payment key except the declined ones
/// and records each call.
#[derive(Default)]
pub struct StubPaymentClient {
    declined: Vec<String>,
    confirmed: Mutex<Vec<String>>,
    cancelled: Mutex<Vec<String>>,
}

impl StubPaymentClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declining(payment_keys: &[&str]) -> Self {
        Self {
            declined: payment_keys.iter().map(|k| k.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Payment keys of every confirm call, successful or not, in call order.
    pub fn confirmed(&self) -> Vec<String> {
        self.confirmed.lock().unwrap().clone()
    }

    pub fn cancelled(&self) -> Vec<String> {
        self.cancelled.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentClient for StubPaymentClient {
    async fn confirm(&self, request: &PaymentRequest) -> Result<PaymentInfo, PaymentError> {
        self.confirmed
            .lock()
            .unwrap()
            .push(request.payment_key.clone());

        if self.declined.contains(&request.payment_key) {
            return Err(PaymentError::Declined {
                code: "REJECT_CARD_PAYMENT".to_string(),
                message: "Card declined".to_string(),
            });
        }

        Ok(PaymentInfo {
            payment_key: request.payment_key.clone(),
            order_id: request.order_id.clone(),
            amount: request.amount,
        })
    }

    async fn cancel(&self, payment_key: &str, _reason: &str) -> Result<(), PaymentError> {
        self.cancelled.lock().unwrap().push(payment_key.to_string());
        Ok(())
    }
}
