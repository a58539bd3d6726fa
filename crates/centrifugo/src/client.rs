//! HTTP client for publishing through the relay.

use reqwest::StatusCode;

use rosseti_core::types::DbId;

use crate::messages::PublishRequest;

/// Errors from a relay call.
///
/// Publishes are NOT retried: a failed relay call surfaces to the caller as
/// a 500-class response and the message is lost.
#[derive(Debug, thiserror::Error)]
pub enum CentrifugoError {
    /// The HTTP call itself failed (connect, DNS, timeout, ...).
    #[error("relay transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The relay answered with a non-200 status.
    #[error("relay rejected request: HTTP {0}")]
    Status(StatusCode),
}

/// Client for the Centrifugo server API endpoint.
///
/// Holds a configured DSN and a shared connection pool; cheap to clone via
/// `Arc` in application state.
pub struct CentrifugoClient {
    http: reqwest::Client,
    dsn: String,
}

impl CentrifugoClient {
    /// Create a client targeting the relay's server API DSN
    /// (e.g. `http://centrifugo:8100`).
    pub fn new(dsn: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            dsn: dsn.into(),
        }
    }

    /// The configured server API DSN.
    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    /// Publish `message` from `sender` to `channel`.
    ///
    /// Succeeds only on HTTP 200 from the relay.
    pub async fn publish(
        &self,
        channel: &str,
        message: &str,
        sender: DbId,
    ) -> Result<(), CentrifugoError> {
        let request = PublishRequest::publish(channel, message, sender);

        let response = self.http.post(&self.dsn).json(&request).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CentrifugoError::Status(status));
        }

        tracing::debug!(channel, sender, "Published message to relay");
        Ok(())
    }
}
