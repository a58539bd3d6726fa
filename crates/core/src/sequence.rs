//! Random identifier sequences.
//!
//! Session ids are opaque bearer tokens, so the generator must be backed by
//! a cryptographically secure RNG. `rand::rng()` (ThreadRng) is a CSPRNG,
//! which satisfies that requirement without pulling in a dedicated crate.

use rand::Rng;

/// The 62-symbol alphabet used for session identifiers.
pub const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of a session identifier.
pub const SESSION_ID_LEN: usize = 100;

/// Produce a random sequence of `len` characters drawn from [`ALPHANUMERIC`].
pub fn alphanumeric(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| ALPHANUMERIC[rng.random_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}

/// Generate a fresh session identifier.
pub fn session_id() -> String {
    alphanumeric(SESSION_ID_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_length_and_alphabet() {
        let id = session_id();
        assert_eq!(id.len(), SESSION_ID_LEN);
        assert!(id.bytes().all(|b| ALPHANUMERIC.contains(&b)));
    }

    #[test]
    fn test_sequences_differ() {
        // Not a statistical test, just a guard against a constant output.
        let a = session_id();
        let b = session_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(alphanumeric(0), "");
    }
}
