use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure reported by, or while reaching, the payment gateway.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Gateway answered with an error payload.
    #[error("Payment declined ({code}): {message}")]
    Declined { code: String, message: String },

    /// Gateway could not be reached or its answer could not be decoded.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Converts payment errors into 402 Payment Required.
///
/// Declines carry the gateway message; transport failures are logged and
/// answered with a generic message.
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Declined { message, .. } => message,
            Self::Request(err) => {
                tracing::warn!("Payment gateway request failed: {}", err);
                "Payment gateway unavailable, please try again".to_string()
            }
        };

        (StatusCode::PAYMENT_REQUIRED, Json(ErrorDto { error: message })).into_response()
    }
}
