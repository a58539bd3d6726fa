//! Ordinal user roles.
//!
//! Access control everywhere in the platform is "minimum role required":
//! a caller passes a gate when `caller.role >= min_role`. The derive order
//! of the variants IS the permission order, and the same string table is
//! used for JSON and for the `users.role` TEXT column, so the wire
//! representation can never drift from the comparison order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Permission level attached to every user, lowest to highest.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Default for newly registered users.
    #[default]
    RestrictedUser,
    Electrician,
    Master,
    Engineer,
    Admin,
}

impl Role {
    /// Canonical string form, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::RestrictedUser => "RESTRICTED_USER",
            Role::Electrician => "ELECTRICIAN",
            Role::Master => "MASTER",
            Role::Engineer => "ENGINEER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESTRICTED_USER" => Ok(Role::RestrictedUser),
            "ELECTRICIAN" => Ok(Role::Electrician),
            "MASTER" => Ok(Role::Master),
            "ENGINEER" => Ok(Role::Engineer),
            "ADMIN" => Ok(Role::Admin),
            other => Err(CoreError::Validation(format!("unknown role: {other}"))),
        }
    }
}

// `#[sqlx(try_from = "String")]` on model fields goes through this impl.
impl TryFrom<String> for Role {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
