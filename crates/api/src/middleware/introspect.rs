//! Session introspection gates.
//!
//! Each extractor resolves the caller's session cookie to a user and checks
//! that the user's role meets the route's minimum, short-circuiting the
//! handler on failure. Lookup failures answer 400 (never 404, so callers
//! cannot probe which sessions exist); an insufficient role answers 403.
//!
//! When `introspection_enabled` is false the gates pass every request
//! through untouched and carry no identity, which is why the payload is an
//! `Option`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use rosseti_core::error::CoreError;
use rosseti_core::roles::Role;
use rosseti_core::types::DbId;
use rosseti_db::repositories::{SessionRepo, UserRepo};

use crate::auth::token::session_cookie;
use crate::error::AppError;
use crate::state::AppState;

/// Identity established by a passing introspection.
#[derive(Debug, Clone)]
pub struct Introspection {
    /// The session that authenticated this request.
    pub session_id: String,
    /// The user owning the session.
    pub user_id: DbId,
    /// The user's role at lookup time.
    pub role: Role,
}

/// Resolve the session cookie to a user and enforce `min_role`.
///
/// Returns `None` when introspection is globally disabled.
async fn introspect(
    parts: &Parts,
    state: &AppState,
    min_role: Role,
) -> Result<Option<Introspection>, AppError> {
    if !state.config.introspection_enabled {
        return Ok(None);
    }

    let session_id = session_cookie(&parts.headers).ok_or_else(|| {
        AppError::Core(CoreError::BadAuthRequest("missing session cookie".into()))
    })?;

    let session = SessionRepo::find_by_id(&state.pool, &session_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::BadAuthRequest("unknown session".into())))?;

    tracing::debug!(user_id = session.user_id, "Good session");

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::BadAuthRequest(
                "session owner no longer exists".into(),
            ))
        })?;

    if user.role < min_role {
        tracing::warn!(
            user_id = user.id,
            role = %user.role,
            min_role = %min_role,
            "Restricted access",
        );
        return Err(AppError::Core(CoreError::Forbidden(
            "restricted access to user".into(),
        )));
    }

    Ok(Some(Introspection {
        session_id,
        user_id: user.id,
        role: user.role,
    }))
}

/// Requires any authenticated user. Payload is `None` only in bypass mode.
pub struct RequireUser(pub Option<Introspection>);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        introspect(parts, state, Role::RestrictedUser)
            .await
            .map(RequireUser)
    }
}

/// Requires the `Engineer` role or higher. Rejects with 403 otherwise.
pub struct RequireEngineer(pub Option<Introspection>);

impl FromRequestParts<AppState> for RequireEngineer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        introspect(parts, state, Role::Engineer)
            .await
            .map(RequireEngineer)
    }
}

/// Requires the `Admin` role. Rejects with 403 otherwise.
pub struct RequireAdmin(pub Option<Introspection>);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        introspect(parts, state, Role::Admin).await.map(RequireAdmin)
    }
}
