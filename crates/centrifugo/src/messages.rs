//! Wire types for the Centrifugo server API.

use serde::Serialize;

use rosseti_core::types::DbId;

/// Top-level server API envelope: `{"method": "publish", "params": {..}}`.
#[derive(Debug, Serialize)]
pub struct PublishRequest<'a> {
    pub method: &'static str,
    pub params: PublishParams<'a>,
}

/// Parameters of a `publish` call.
#[derive(Debug, Serialize)]
pub struct PublishParams<'a> {
    pub channel: &'a str,
    pub data: PublishData<'a>,
}

/// The payload broadcast to channel subscribers.
#[derive(Debug, Serialize)]
pub struct PublishData<'a> {
    pub message: &'a str,
    pub sender: DbId,
}

impl<'a> PublishRequest<'a> {
    /// Build a `publish` envelope for `channel` carrying `message` from
    /// `sender`.
    pub fn publish(channel: &'a str, message: &'a str, sender: DbId) -> Self {
        Self {
            method: "publish",
            params: PublishParams {
                channel,
                data: PublishData { message, sender },
            },
        }
    }
}
