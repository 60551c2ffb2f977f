use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reservation request rejected by booking rules.
#[derive(Error, Debug)]
pub enum ReservationError {
    /// Requested date lies before today.
    #[error("Cannot reserve a date in the past: {0}")]
    PastDate(NaiveDate),

    /// Member already holds a reservation or a waiting entry for the slot key.
    #[error("A reservation or waiting request already exists for this slot")]
    DuplicateRequest,
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
