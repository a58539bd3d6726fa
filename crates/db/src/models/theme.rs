//! Discussion theme model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use rosseti_core::types::{DbId, Timestamp};

/// A theme row from the `themes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Theme {
    pub id: DbId,
    pub direction_id: DbId,
    pub title: String,
    pub likes: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new theme.
#[derive(Debug, Deserialize)]
pub struct CreateTheme {
    pub direction_id: DbId,
    pub title: String,
}
