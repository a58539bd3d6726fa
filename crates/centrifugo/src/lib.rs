//! HTTP client for the Centrifugo real-time relay.
//!
//! The relay is an external peer reached over its server API: a single JSON
//! POST endpoint accepting `{"method": .., "params": ..}` envelopes. This
//! crate owns the wire types and the publish call; everything else about the
//! relay (client connections, channel subscriptions) happens outside this
//! process.

pub mod client;
pub mod messages;

pub use client::{CentrifugoClient, CentrifugoError};
