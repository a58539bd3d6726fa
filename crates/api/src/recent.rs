//! Per-process cache of the most recently published-to themes.
//!
//! Backs the "last active themes" listing without scanning the `themes`
//! table. Deliberately not persisted: a restart simply starts tracking from
//! scratch.

use indexmap::IndexMap;
use tokio::sync::RwLock;

use rosseti_core::error::CoreError;
use rosseti_core::types::DbId;

use crate::handlers::centrifugo::Publish;

/// Maximum number of themes tracked.
pub const CAPACITY: usize = 10;

/// Publish payload type tag that marks theme traffic; every other tag is
/// ignored by the cache.
pub const THEME_TYPE: &str = "theme";

/// Bounded, insertion-ordered set of recently active themes.
///
/// One `IndexMap` keyed by the channel string and holding the parsed theme
/// id serves as both the eviction order and the membership index, so the
/// two can never disagree. The whole structure sits behind a single
/// `RwLock`; every mutation is one critical section. Designed to be wrapped
/// in `Arc` and shared across in-flight requests.
pub struct RecentThemes {
    entries: RwLock<IndexMap<String, DbId>>,
}

impl RecentThemes {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(IndexMap::with_capacity(CAPACITY)),
        }
    }

    /// Record a publish.
    ///
    /// Payloads whose type tag is not `"theme"` are a no-op. For theme
    /// traffic the channel string must parse as a numeric theme id.
    /// Re-publishing a tracked channel refreshes its position to
    /// most-recent; a new channel at capacity evicts the oldest entry
    /// first. The map never holds more than [`CAPACITY`] entries.
    pub async fn record(&self, publish: &Publish) -> Result<(), CoreError> {
        if publish.kind != THEME_TYPE {
            return Ok(());
        }

        let theme_id: DbId = publish.channel.parse().map_err(|_| {
            CoreError::Validation(format!(
                "channel is not a numeric theme id: {}",
                publish.channel
            ))
        })?;

        let mut entries = self.entries.write().await;
        entries.shift_remove(&publish.channel);
        if entries.len() == CAPACITY {
            entries.shift_remove_index(0);
        }
        entries.insert(publish.channel.clone(), theme_id);

        tracing::debug!(channel = %publish.channel, theme_id, "Last active theme recorded");
        Ok(())
    }

    /// Snapshot of the tracked theme ids, oldest first.
    pub async fn theme_ids(&self) -> Vec<DbId> {
        self.entries.read().await.values().copied().collect()
    }

    /// Whether `channel` is currently tracked.
    pub async fn contains(&self, channel: &str) -> bool {
        self.entries.read().await.contains_key(channel)
    }

    /// Number of tracked themes.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for RecentThemes {
    fn default() -> Self {
        Self::new()
    }
}
