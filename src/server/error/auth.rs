use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No member id stored in the session; the request is unauthenticated.
    #[error("Member not found in session")]
    UserNotInSession,

    /// Session references a member id that no longer exists.
    #[error("Member {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Member is authenticated but not allowed to perform the action.
    ///
    /// # Fields
    /// - Id of the member that was denied
    /// - Server-side description of what was attempted
    #[error("Member {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Email unknown or password mismatch on login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password could not be hashed during signup.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401
/// - `AccessDenied` → 403
/// - `PasswordHash` → 500
///
/// Details are logged at debug level; client messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Login required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::PasswordHash(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
