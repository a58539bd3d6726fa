//! Handlers for the `/sessions` resource.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use rosseti_core::error::CoreError;
use rosseti_db::repositories::SessionRepo;

use crate::auth::token::session_cookie;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// DELETE /api/v1/sessions
///
/// Log out: delete the session named by the `rosseti-session` cookie.
/// Deleting an already-deleted session succeeds -- the row-level delete is
/// idempotent.
pub async fn delete_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<StatusCode> {
    let session_id = session_cookie(&headers).ok_or_else(|| {
        AppError::Core(CoreError::BadAuthRequest("missing session cookie".into()))
    })?;

    let removed = SessionRepo::delete(&state.pool, &session_id).await?;

    tracing::info!(removed, "Session delete requested");

    Ok(StatusCode::NO_CONTENT)
}
