use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::member::{MembersDto, SignupDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::member::SignupParam,
        service::member::MemberService,
        state::AppState,
    },
};

/// Register a new member.
///
/// # Returns
/// - `201 Created` - Body is the new member
/// - `409 Conflict` - Email already registered
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let member = MemberService::new(&state.db)
        .signup(SignupParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// List every member.
///
/// # Access Control
/// - `Admin`
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let members = MemberService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(MembersDto {
            members: members.into_iter().map(|m| m.into_dto()).collect(),
        }),
    ))
}
