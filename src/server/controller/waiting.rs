use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::reservation::WaitersDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::member::Requester,
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// List every waiting entry in queue order.
///
/// # Access Control
/// - `Admin`
pub async fn get_waiters(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let waiters = ReservationService::new(&state.db, state.payment_client.as_ref())
        .list_waiters()
        .await?;

    Ok((
        StatusCode::OK,
        Json(WaitersDto {
            waiters: waiters.into_iter().map(|w| w.into_dto()).collect(),
        }),
    ))
}

/// Leave a waiting list.
///
/// # Access Control
/// - Owner of the entry, or `Admin`
pub async fn delete_waiter(
    State(state): State<AppState>,
    session: Session,
    Path(waiter_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ReservationService::new(&state.db, state.payment_client.as_ref())
        .cancel_waiter(Requester::from(&member), waiter_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
