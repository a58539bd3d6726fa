//! Authorization middleware extractors.
//!
//! - [`introspect::RequireUser`] -- any authenticated user.
//! - [`introspect::RequireEngineer`] -- `Engineer` role or higher.
//! - [`introspect::RequireAdmin`] -- `Admin` role.

pub mod introspect;
