//! Request handlers, one module per resource.

pub mod auth;
pub mod centrifugo;
pub mod sessions;
pub mod themes;
pub mod users;
