//! Repository for the `directions` table.

use sqlx::PgPool;

use crate::models::direction::Direction;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides read operations for innovation directions.
///
/// Directions are reference data seeded by operators; the API only lists
/// them.
pub struct DirectionRepo;

impl DirectionRepo {
    /// List all directions ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Direction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directions ORDER BY id");
        sqlx::query_as::<_, Direction>(&query).fetch_all(pool).await
    }
}
