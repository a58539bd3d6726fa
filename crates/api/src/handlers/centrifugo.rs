//! Handlers for the Centrifugo-facing endpoints: the connect proxy, message
//! publishing, and chat history.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Json;
use serde::{Deserialize, Serialize};

use rosseti_core::error::CoreError;
use rosseti_core::types::DbId;
use rosseti_db::models::chat::ChatHistory;
use rosseti_db::models::session::Session;
use rosseti_db::repositories::{ChatRepo, SessionRepo};

use crate::auth::token::extract_token;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /centrifugo/publish`.
#[derive(Debug, Clone, Deserialize)]
pub struct Publish {
    /// Target channel; numeric in practice (the theme id).
    pub channel: String,
    pub message: String,
    /// Payload discriminator; `"theme"` publishes feed the recency cache.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Connect-proxy payload: the authenticated user id as a string, per the
/// relay's connect-proxy contract.
#[derive(Debug, Serialize)]
pub struct ConnectResult {
    pub user: String,
}

/// Envelope the relay expects from the connect proxy.
#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub result: ConnectResult,
}

/// Resolve a raw token to its session row; unknown tokens answer 400.
async fn resolve_session(state: &AppState, token: &str) -> AppResult<Session> {
    SessionRepo::find_by_id(&state.pool, token)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::BadAuthRequest("unknown session".into())))
}

/// POST /api/v1/centrifugo/connect
///
/// Authenticate a relay connection attempt. The relay forwards the client's
/// request, so the token may sit in the query, cookie, body (`data.session`)
/// or Authorization header; this handler has no payload of its own, so
/// consuming the body is safe here.
pub async fn connect(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<ConnectResponse>> {
    let token = extract_token(&uri, &headers, Some(&body))?;
    let session = resolve_session(&state, &token).await?;

    tracing::debug!(user_id = session.user_id, "Good session for connect");

    Ok(Json(ConnectResponse {
        result: ConnectResult {
            user: session.user_id.to_string(),
        },
    }))
}

/// POST /api/v1/centrifugo/publish
///
/// Relay a chat message, persist it, and record theme recency. The token
/// must NOT be read from the body here: the body is the publish payload
/// itself.
///
/// The three effects are not transactional: once the relay accepted the
/// message, a later persistence or recency failure answers 500 without
/// undoing the broadcast.
pub async fn publish(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Json(publish): Json<Publish>,
) -> AppResult<StatusCode> {
    let token = extract_token(&uri, &headers, None)?;
    let session = resolve_session(&state, &token).await?;

    tracing::debug!(user_id = session.user_id, channel = %publish.channel, "Good session for publish");

    state
        .centrifugo
        .publish(&publish.channel, &publish.message, session.user_id)
        .await?;

    let channel_id: DbId = publish.channel.parse().map_err(|_| {
        AppError::InternalError(format!("channel is not numeric: {}", publish.channel))
    })?;

    ChatRepo::append_message(&state.pool, channel_id, session.user_id, &publish.message).await?;

    if let Err(e) = state.recent_themes.record(&publish).await {
        return Err(AppError::InternalError(format!(
            "failed to record last active theme: {e}"
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/centrifugo/chat/{id}
///
/// Fetch a channel's message history.
pub async fn get_history(
    State(state): State<AppState>,
    Path(channel_id): Path<DbId>,
) -> AppResult<Json<DataResponse<ChatHistory>>> {
    let history = ChatRepo::get_history(&state.pool, channel_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChatChannel",
            id: channel_id,
        }))?;

    Ok(Json(DataResponse { data: history }))
}
