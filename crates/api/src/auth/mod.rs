//! Authentication primitives.
//!
//! - [`password`] -- credential hashing and constant-time verification.
//! - [`token`] -- session-token extraction from the request transport.

pub mod password;
pub mod token;

use rosseti_core::error::CoreError;

/// Normalize an email address for storage and lookup: trimmed, lowercased,
/// and required to contain exactly one `@` with a non-empty local part and
/// domain.
pub fn normalize_email(email: &str) -> Result<String, CoreError> {
    let normalized = email.trim().to_lowercase();
    match normalized.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(normalized)
        }
        _ => Err(CoreError::Validation(format!("invalid email: {email}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  Ivan.Petrov@Example.COM ").unwrap(),
            "ivan.petrov@example.com"
        );
    }

    #[test]
    fn test_invalid_emails_rejected() {
        for bad in ["", "plain", "@nolocal.com", "nodomain@", "two@@ats.com"] {
            assert!(normalize_email(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
