use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{check, login, logout},
        member::{get_members, signup},
        reservation::{
            create_reservation, delete_reservation, get_my_reservations, get_reservations,
        },
        theme::{create_theme, delete_theme, get_most_reserved_last_week, get_themes},
        time_slot::{create_time, delete_time, get_available_times, get_times},
        waiting::{delete_waiter, get_waiters},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/members", post(signup).get(get_members))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/login/check", get(check))
        .route("/themes", get(get_themes).post(create_theme))
        .route(
            "/themes/most-reserved-last-week",
            get(get_most_reserved_last_week),
        )
        .route("/themes/{id}", delete(delete_theme))
        .route("/times", get(get_times).post(create_time))
        .route("/times/available", get(get_available_times))
        .route("/times/{id}", delete(delete_time))
        .route(
            "/reservations",
            post(create_reservation).get(get_reservations),
        )
        .route("/reservations/waiting", get(get_waiters))
        .route("/reservations/waiting/{id}", delete(delete_waiter))
        .route("/reservations/{id}", delete(delete_reservation))
        .route("/reservations-mine", get(get_my_reservations))
}
