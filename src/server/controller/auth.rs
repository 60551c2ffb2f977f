use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::member::LoginDto,
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::member::LoginParam,
        service::member::MemberService,
        state::AppState,
    },
};

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Logged in; body is the member
/// - `401 Unauthorized` - Unknown email or wrong password
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let member = MemberService::new(&state.db)
        .login(LoginParam::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_member_id(member.id).await?;

    tracing::info!("Member {} logged in", member.id);

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Log out by clearing the session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged-in member.
///
/// # Returns
/// - `200 OK` - Body is the member
/// - `401 Unauthorized` - Not logged in
pub async fn check(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}
