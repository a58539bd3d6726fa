//! Innovation direction model.

use serde::Serialize;
use sqlx::FromRow;

use rosseti_core::types::{DbId, Timestamp};

use crate::models::theme::Theme;

/// A direction row from the `directions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Direction {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A direction together with all of its themes, for the detailed listing.
#[derive(Debug, Serialize)]
pub struct DirectionDetailed {
    pub direction: Direction,
    pub themes: Vec<Theme>,
}
