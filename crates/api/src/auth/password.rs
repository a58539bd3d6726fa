//! Credential hashing and verification.
//!
//! Stored credentials are SHA-256 hex digests of the password, compared in
//! constant time. The digest format matches the rows already in production,
//! so existing accounts keep working.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Hash a plaintext credential to its lowercase hex SHA-256 digest.
///
/// An empty input hashes to the empty string, which can never match a
/// stored digest.
pub fn hash_credential(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }

    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Verify a plaintext credential against a stored digest in constant time.
pub fn verify_credential(stored_hash: &str, secret: &str) -> bool {
    let computed = hash_credential(secret);
    stored_hash.as_bytes().ct_eq(computed.as_bytes()).into()
}
