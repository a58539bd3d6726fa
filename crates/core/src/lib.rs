//! Domain primitives shared by every crate in the workspace: error taxonomy,
//! database scalar types, the ordinal role model, and random identifier
//! sequences.

pub mod error;
pub mod roles;
pub mod sequence;
pub mod types;
