//! Handlers for credential authentication (`/auth`, `/credentials`).

use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use rosseti_core::error::CoreError;
use rosseti_core::types::DbId;
use rosseti_db::models::user::{User, UserResponse};
use rosseti_db::repositories::{SessionRepo, UserRepo};

use crate::auth::normalize_email;
use crate::auth::password::{hash_credential, verify_credential};
use crate::auth::token::SESSION_COOKIE;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Client-side cookie lifetime hint. The server itself never expires
/// sessions; they live until explicitly deleted.
const SESSION_COOKIE_MAX_AGE_SECS: i64 = 24 * 60 * 60;

/// Request body for `POST /auth` and `POST /credentials`: a password plus
/// either an email or a phone number.
#[derive(Debug, Deserialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Request body for `PUT /credentials/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCredentials {
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    pub old_password: String,
}

/// Look up a user by the provided credentials.
///
/// Phone beats email when both are given. Returns `Ok(None)` when the user
/// does not exist or the password does not match -- the two cases are
/// indistinguishable to the caller on purpose.
async fn find_by_credentials(
    state: &AppState,
    input: &Credentials,
) -> AppResult<Option<User>> {
    let user = if let Some(phone) = input.phone.as_deref().filter(|p| !p.is_empty()) {
        UserRepo::find_by_phone(&state.pool, phone).await?
    } else if let Some(email) = input.email.as_deref().filter(|e| !e.is_empty()) {
        let email = normalize_email(email)?;
        UserRepo::find_by_email(&state.pool, &email).await?
    } else {
        return Err(AppError::Core(CoreError::Validation(
            "empty credentials".into(),
        )));
    };

    Ok(user.filter(|u| verify_credential(&u.credential_hash, &input.password)))
}

/// POST /api/v1/auth
///
/// Authenticate and open a session. The session record is returned in the
/// body and its id is also set as the `rosseti-session` cookie with a
/// 24-hour client-side expiry hint.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<Credentials>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let user = find_by_credentials(&state, &input).await?.ok_or_else(|| {
        AppError::Core(CoreError::BadAuthRequest("invalid credentials".into()))
    })?;

    let session = SessionRepo::create(&state.pool, user.id).await?;

    tracing::info!(user_id = user.id, "Session created");

    let cookie = format!(
        "{SESSION_COOKIE}={}; Path=/; Max-Age={SESSION_COOKIE_MAX_AGE_SECS}; HttpOnly",
        session.id
    );

    Ok((
        [(SET_COOKIE, cookie)],
        Json(DataResponse { data: session }),
    ))
}

/// POST /api/v1/credentials
///
/// Verify credentials without opening a session; answers 401 on mismatch.
pub async fn verify_credentials(
    State(state): State<AppState>,
    Json(input): Json<Credentials>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let user = find_by_credentials(&state, &input).await?.ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized("invalid credentials".into()))
    })?;

    Ok(Json(DataResponse { data: user.into() }))
}

/// PUT /api/v1/credentials/{id}
///
/// Change a user's password. Requires the current password, and rejects
/// reusing it as the new one.
pub async fn update_credentials(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateCredentials>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    if !verify_credential(&user.credential_hash, &input.old_password) {
        return Err(AppError::Core(CoreError::Unauthorized(
            "old password does not match".into(),
        )));
    }

    if input.password == input.old_password {
        return Err(AppError::Core(CoreError::Validation(
            "new password same as old".into(),
        )));
    }

    UserRepo::update_credential_hash(&state.pool, user_id, &hash_credential(&input.password))
        .await?;

    tracing::info!(user_id, "Credentials updated");

    Ok(Json(DataResponse { data: user.into() }))
}
