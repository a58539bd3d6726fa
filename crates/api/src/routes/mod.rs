//! Route definitions.

pub mod health;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{auth, centrifugo, sessions, themes, users};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth                        login: open a session, set cookie (public)
/// /user                        register (public)
/// /users/{id}                  get (any role), update / delete (admin)
/// /credentials                 verify credentials (public)
/// /credentials/{id}            change password
/// /sessions                    delete session (cookie required)
///
/// /centrifugo/connect          relay connect proxy (session token)
/// /centrifugo/publish          relay publish (session token)
/// /centrifugo/chat/{id}        chat history
///
/// /themes                      create theme (engineer+)
/// /themes/last-active          recently active themes
/// /themes/{id}/like            like a theme
/// /directions                  list directions
/// /directions/detailed         directions with their themes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth", post(auth::login))
        .route("/user", post(users::register))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/credentials", post(auth::verify_credentials))
        .route("/credentials/{id}", put(auth::update_credentials))
        .route("/sessions", delete(sessions::delete_session))
        .route("/centrifugo/connect", post(centrifugo::connect))
        .route("/centrifugo/publish", post(centrifugo::publish))
        .route("/centrifugo/chat/{id}", get(centrifugo::get_history))
        .route("/themes", post(themes::create_theme))
        .route("/themes/last-active", get(themes::list_last_active))
        .route("/themes/{id}/like", put(themes::like_theme))
        .route("/directions", get(themes::list_directions))
        .route("/directions/detailed", get(themes::list_directions_detailed))
}
