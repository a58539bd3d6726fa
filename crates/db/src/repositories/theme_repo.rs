//! Repository for the `themes` table.

use sqlx::PgPool;

use rosseti_core::types::DbId;

use crate::models::theme::{CreateTheme, Theme};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, direction_id, title, likes, created_at, updated_at, deleted_at";

/// Provides CRUD operations for themes.
pub struct ThemeRepo;

impl ThemeRepo {
    /// Insert a new theme, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTheme) -> Result<Theme, sqlx::Error> {
        let query = format!(
            "INSERT INTO themes (direction_id, title)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(input.direction_id)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    /// Find a theme by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all themes under a direction.
    pub async fn list_by_direction(
        pool: &PgPool,
        direction_id: DbId,
    ) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM themes
             WHERE direction_id = $1 AND deleted_at IS NULL
             ORDER BY id"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(direction_id)
            .fetch_all(pool)
            .await
    }

    /// List the themes whose ids appear in `ids`.
    ///
    /// Backs the "last active themes" listing: the caller passes the recency
    /// cache snapshot and gets full rows. Unknown ids are silently skipped,
    /// so a cached id whose theme was deleted does not break the listing.
    pub async fn list_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM themes
             WHERE id = ANY($1) AND deleted_at IS NULL
             ORDER BY id"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Increment a theme's like counter. Returns `true` if a row was updated.
    pub async fn like(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE themes SET likes = likes + 1, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
