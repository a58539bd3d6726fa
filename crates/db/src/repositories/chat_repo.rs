//! Repository for chat history (`chat_channels` + `chat_messages`).
//!
//! Channels are created lazily on the first message, so publishers never
//! need a separate "create channel" step.

use sqlx::PgPool;

use rosseti_core::types::DbId;

use crate::models::chat::{ChatChannel, ChatHistory, ChatMessage};

const CHANNEL_COLUMNS: &str = "id, name, last_message_id, created_at, updated_at";
const MESSAGE_COLUMNS: &str = "channel_id, message_id, sender, body, sent_at";

/// Provides chat history persistence keyed by integer channel id.
pub struct ChatRepo;

impl ChatRepo {
    /// Fetch a channel and its messages in send order.
    ///
    /// Returns `None` when the channel has never been written to.
    pub async fn get_history(
        pool: &PgPool,
        channel_id: DbId,
    ) -> Result<Option<ChatHistory>, sqlx::Error> {
        let query = format!("SELECT {CHANNEL_COLUMNS} FROM chat_channels WHERE id = $1");
        let channel = sqlx::query_as::<_, ChatChannel>(&query)
            .bind(channel_id)
            .fetch_optional(pool)
            .await?;

        let Some(channel) = channel else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {MESSAGE_COLUMNS} FROM chat_messages
             WHERE channel_id = $1
             ORDER BY message_id"
        );
        let messages = sqlx::query_as::<_, ChatMessage>(&query)
            .bind(channel_id)
            .fetch_all(pool)
            .await?;

        Ok(Some(ChatHistory {
            id: channel.id,
            name: channel.name,
            last_message_id: channel.last_message_id,
            messages,
        }))
    }

    /// Append a message to a channel, creating the channel with an empty
    /// message list if this is its first message.
    ///
    /// The channel's `last_message_id` counter and the inserted message id
    /// advance together inside one transaction.
    pub async fn append_message(
        pool: &PgPool,
        channel_id: DbId,
        sender: DbId,
        body: &str,
    ) -> Result<ChatMessage, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let created = sqlx::query(
            "INSERT INTO chat_channels (id) VALUES ($1) ON CONFLICT (id) DO NOTHING",
        )
        .bind(channel_id)
        .execute(&mut *tx)
        .await?;
        if created.rows_affected() > 0 {
            tracing::debug!(channel_id, "Created chat channel on first message");
        }

        let next_id: DbId = sqlx::query_scalar(
            "UPDATE chat_channels
             SET last_message_id = last_message_id + 1, updated_at = NOW()
             WHERE id = $1
             RETURNING last_message_id",
        )
        .bind(channel_id)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO chat_messages (channel_id, message_id, sender, body)
             VALUES ($1, $2, $3, $4)
             RETURNING {MESSAGE_COLUMNS}"
        );
        let message = sqlx::query_as::<_, ChatMessage>(&query)
            .bind(channel_id)
            .bind(next_id)
            .bind(sender)
            .bind(body)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(message)
    }
}
