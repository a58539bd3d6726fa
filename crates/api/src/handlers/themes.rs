//! Handlers for discussion themes and innovation directions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use rosseti_core::error::CoreError;
use rosseti_core::types::DbId;
use rosseti_db::models::direction::{Direction, DirectionDetailed};
use rosseti_db::models::theme::{CreateTheme, Theme};
use rosseti_db::repositories::{DirectionRepo, ThemeRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::introspect::RequireEngineer;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/themes
///
/// Open a new discussion theme under a direction. Requires `Engineer` or
/// higher.
pub async fn create_theme(
    RequireEngineer(_caller): RequireEngineer,
    State(state): State<AppState>,
    Json(input): Json<CreateTheme>,
) -> AppResult<impl IntoResponse> {
    let theme = ThemeRepo::create(&state.pool, &input).await?;

    tracing::info!(theme_id = theme.id, direction_id = theme.direction_id, "Theme created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: theme })))
}

/// GET /api/v1/themes/last-active
///
/// List the themes most recently published to, straight from the recency
/// cache. Empty right after startup by design -- the cache is not
/// persisted.
pub async fn list_last_active(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Theme>>>> {
    let ids = state.recent_themes.theme_ids().await;

    let themes = if ids.is_empty() {
        Vec::new()
    } else {
        ThemeRepo::list_by_ids(&state.pool, &ids).await?
    };

    Ok(Json(DataResponse { data: themes }))
}

/// PUT /api/v1/themes/{id}/like
///
/// Increment a theme's like counter.
pub async fn like_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let liked = ThemeRepo::like(&state.pool, theme_id).await?;

    if !liked {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Theme",
            id: theme_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/directions
///
/// List all innovation directions.
pub async fn list_directions(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Direction>>>> {
    let directions = DirectionRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: directions }))
}

/// GET /api/v1/directions/detailed
///
/// List all directions together with their themes.
pub async fn list_directions_detailed(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DirectionDetailed>>>> {
    let directions = DirectionRepo::list_all(&state.pool).await?;

    let mut detailed = Vec::with_capacity(directions.len());
    for direction in directions {
        let themes = ThemeRepo::list_by_direction(&state.pool, direction.id).await?;
        detailed.push(DirectionDetailed { direction, themes });
    }

    Ok(Json(DataResponse { data: detailed }))
}
