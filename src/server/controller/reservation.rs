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
    model::reservation::{
        CreateReservationDto, MyReservationsDto, ReservationSearchQuery, ReservationsDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            member::Requester,
            reservation::{BookingRequest, ReservationFilter},
        },
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Book a slot or join its waiting list.
///
/// # Returns
/// - `201 Created` - Body has `status` `booked` or `waiting` (with `position`)
/// - `400 Bad Request` - Missing or blank field, past date, or duplicate request
/// - `401 Unauthorized` - Not logged in
/// - `402 Payment Required` - Gateway declined the payment
/// - `404 Not Found` - Unknown theme or time slot
/// - `409 Conflict` - Lost a race for the slot
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateReservationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let outcome = ReservationService::new(&state.db, state.payment_client.as_ref())
        .create(BookingRequest::from_dto(member.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(outcome.into_dto())))
}

/// Search every reservation.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `query` - Optional `themeId`, `memberId`, `dateFrom`, `dateTo` (inclusive)
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
    query: Result<Query<ReservationSearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(query) = query?;

    let reservations = ReservationService::new(&state.db, state.payment_client.as_ref())
        .list_all(ReservationFilter::from_query(query))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReservationsDto {
            reservations: reservations.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// Cancel a reservation and promote the next waiter.
///
/// # Access Control
/// - Owner of the reservation, or `Admin`
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ReservationService::new(&state.db, state.payment_client.as_ref())
        .cancel_reservation(Requester::from(&member), reservation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// The logged-in member's reservations and waiting entries.
pub async fn get_my_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let entries = ReservationService::new(&state.db, state.payment_client.as_ref())
        .list_for_member(member.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MyReservationsDto {
            reservations: entries.into_iter().map(|e| e.into_dto()).collect(),
        }),
    ))
}
