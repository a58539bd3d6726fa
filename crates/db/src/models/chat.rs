//! Chat channel and message models.
//!
//! A channel's `id` equals the numeric id of the theme it belongs to and is
//! assigned by the publisher, not by the database.

use serde::Serialize;
use sqlx::FromRow;

use rosseti_core::types::{DbId, Timestamp};

/// A channel row from the `chat_channels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatChannel {
    pub id: DbId,
    pub name: String,
    /// Monotonic per-channel message counter; the id of the newest message.
    pub last_message_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A message row from the `chat_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatMessage {
    pub channel_id: DbId,
    pub message_id: DbId,
    pub sender: DbId,
    pub body: String,
    pub sent_at: Timestamp,
}

/// A channel with its messages in send order, as returned by the history
/// endpoint.
#[derive(Debug, Serialize)]
pub struct ChatHistory {
    pub id: DbId,
    pub name: String,
    pub last_message_id: DbId,
    pub messages: Vec<ChatMessage>,
}
