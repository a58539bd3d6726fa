//! Handlers for the `/user` and `/users` resources.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use rosseti_core::error::CoreError;
use rosseti_core::roles::Role;
use rosseti_core::types::DbId;
use rosseti_db::models::user::{CreateUser, UpdateUser, UserResponse};
use rosseti_db::repositories::UserRepo;

use crate::auth::normalize_email;
use crate::auth::password::hash_credential;
use crate::error::{AppError, AppResult};
use crate::middleware::introspect::{RequireAdmin, RequireUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /user`: the credentials of the account to create.
#[derive(Debug, Deserialize, Validate)]
pub struct NewCredentials {
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    /// Defaults to `RESTRICTED_USER` when omitted.
    #[serde(default)]
    pub role: Role,
}

/// Query parameters for `DELETE /users/{id}`.
#[derive(Debug, Deserialize)]
pub struct DeleteUserQuery {
    /// `true` removes the row permanently; the default stamps `deleted_at`.
    #[serde(default)]
    pub hard: bool,
}

/// POST /api/v1/user
///
/// Register a new user. Duplicate email or phone answers 409.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<NewCredentials>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let email = normalize_email(&input.email)?;

    let create = CreateUser {
        email,
        phone: input.phone.clone(),
        credential_hash: hash_credential(&input.password),
        role: input.role,
    };
    let user = UserRepo::create(&state.pool, &create).await?;

    tracing::info!(user_id = user.id, role = %user.role, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// GET /api/v1/users/{id}
///
/// Fetch a user. Any authenticated caller may look users up.
pub async fn get_user(
    RequireUser(_caller): RequireUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    Ok(Json(DataResponse { data: user.into() }))
}

/// PUT /api/v1/users/{id}
///
/// Partially update a user (admin only).
pub async fn update_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(mut input): Json<UpdateUser>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    if let Some(email) = input.email.as_deref() {
        input.email = Some(normalize_email(email)?);
    }

    let user = UserRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    tracing::info!(user_id, "User updated");

    Ok(Json(DataResponse { data: user.into() }))
}

/// DELETE /api/v1/users/{id}
///
/// Soft-delete a user, or remove the row permanently with `?hard=true`
/// (admin only).
pub async fn delete_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(query): Query<DeleteUserQuery>,
) -> AppResult<StatusCode> {
    let deleted = if query.hard {
        UserRepo::hard_delete(&state.pool, user_id).await?
    } else {
        UserRepo::soft_delete(&state.pool, user_id).await?
    };

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }));
    }

    tracing::info!(user_id, hard = query.hard, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
