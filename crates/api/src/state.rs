use std::sync::Arc;

use rosseti_centrifugo::CentrifugoClient;

use crate::config::ServerConfig;
use crate::recent::RecentThemes;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: rosseti_db::DbPool,
    /// Server configuration (introspection flag, relay DSN, timeouts).
    pub config: Arc<ServerConfig>,
    /// Client for the Centrifugo relay.
    pub centrifugo: Arc<CentrifugoClient>,
    /// Per-process cache of the most recently published-to themes.
    pub recent_themes: Arc<RecentThemes>,
}
