//! Repository for the `sessions` table.
//!
//! A session id doubles as the bearer token, so `create` owns id generation:
//! handlers never pick session ids themselves.

use sqlx::PgPool;

use rosseti_core::sequence;
use rosseti_core::types::DbId;

use crate::models::session::Session;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, created_at, updated_at, deleted_at";

/// Provides CRUD operations for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session for `user_id` with a freshly generated
    /// 100-character alphanumeric id, returning the created row.
    pub async fn create(pool: &PgPool, user_id: DbId) -> Result<Session, sqlx::Error> {
        let id = sequence::session_id();
        let query = format!(
            "INSERT INTO sessions (id, user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(&id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its id. Returns `None` for unknown ids.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session by id. Returns the number of rows removed, which is
    /// `0` for unknown ids -- deleting an absent session is not an error.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
