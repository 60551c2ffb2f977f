use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;
use tower_sessions::Session;

use crate::{
    model::theme::{CreateThemeDto, ThemesDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::theme::CreateThemeParam,
        service::theme::{ThemeService, TOP_THEMES_LIMIT},
        state::AppState,
    },
};

/// List every theme ordered by id.
pub async fn get_themes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let themes = ThemeService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(ThemesDto {
            themes: themes.into_iter().map(|t| t.into_dto()).collect(),
        }),
    ))
}

/// Create a theme.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Body is the new theme
/// - `400 Bad Request` - Missing field or blank name
/// - `409 Conflict` - Name already taken
pub async fn create_theme(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateThemeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;

    let theme = ThemeService::new(&state.db)
        .create(CreateThemeParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(theme.into_dto())))
}

/// Delete a theme.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `404 Not Found` - No such theme
/// - `409 Conflict` - Reservations reference the theme
pub async fn delete_theme(
    State(state): State<AppState>,
    session: Session,
    Path(theme_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ThemeService::new(&state.db).delete(theme_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// The most reserved themes of the last seven days, today excluded.
pub async fn get_most_reserved_last_week(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let today = Local::now().date_naive();

    let themes = ThemeService::new(&state.db)
        .top_n(today, TOP_THEMES_LIMIT)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ThemesDto {
            themes: themes.into_iter().map(|t| t.into_dto()).collect(),
        }),
    ))
}
