use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::time_slot::{AvailableTimesDto, AvailableTimesQuery, CreateTimeSlotDto, TimeSlotsDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::time_slot::TimeSlotService,
        state::AppState,
    },
};

/// List every time slot ordered by time.
pub async fn get_times(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let slots = TimeSlotService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(TimeSlotsDto {
            times: slots.into_iter().map(|s| s.into_dto()).collect(),
        }),
    ))
}

/// Create a time slot.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Body is the new slot
/// - `409 Conflict` - A slot already starts at that time
pub async fn create_time(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateTimeSlotDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;

    let slot = TimeSlotService::new(&state.db).create(payload.time).await?;

    Ok((StatusCode::CREATED, Json(slot.into_dto())))
}

/// Delete a time slot.
///
/// # Access Control
/// - `Admin`
pub async fn delete_time(
    State(state): State<AppState>,
    session: Session,
    Path(time_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TimeSlotService::new(&state.db).delete(time_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List every slot for a theme and date with its booked flag.
pub async fn get_available_times(
    State(state): State<AppState>,
    query: Result<Query<AvailableTimesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let times = TimeSlotService::new(&state.db)
        .available_times(query.date, query.theme_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AvailableTimesDto {
            times: times.into_iter().map(|t| t.into_dto()).collect(),
        }),
    ))
}
