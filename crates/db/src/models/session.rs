//! Session model.

use serde::Serialize;
use sqlx::FromRow;

use rosseti_core::types::{DbId, Timestamp};

/// A session row from the `sessions` table.
///
/// The `id` is the opaque bearer token itself (100 random alphanumeric
/// characters), so the row is safe to serialize back to the session owner
/// but must never appear in responses to anyone else.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}
