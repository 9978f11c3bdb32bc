//! Webhook signature derivation and verification.
//!
//! Dynzup signs webhook requests with an iterated SHA-256 scheme: the
//! signature is the digest of `prefix + secret_key` hashed for a fixed
//! number of rounds, each round consuming the previous round's lowercase
//! hex digest. This is a key-stretching construction, not an HMAC.

use sha2::{Digest, Sha256};

/// Number of hash rounds in the signature scheme.
///
/// Protocol constant. Senders and receivers must agree on it or no
/// signature will ever match.
pub const SIGNATURE_ROUNDS: usize = 8;

/// Iteratively hash a string, feeding each round's lowercase hex digest
/// back in as the next round's input.
pub fn iterated_sha256(value: &str, rounds: usize) -> String {
    let mut hashed = value.to_string();

    for _ in 0..rounds {
        hashed = hex::encode(Sha256::digest(hashed.as_bytes()));
    }
    hashed
}

/// Derive the expected signature for a prefix token and secret key.
pub fn expected_signature(prefix: &str, secret_key: &str) -> String {
    iterated_sha256(&format!("{}{}", prefix, secret_key), SIGNATURE_ROUNDS)
}

/// Verify a presented webhook signature.
///
/// Returns `true` iff the presented string exactly equals the derived
/// expected signature (case- and length-sensitive). Pure function of its
/// inputs; the caller turns a `false` into a rejection.
pub fn verify_signature(prefix: &str, secret_key: &str, presented: &str) -> bool {
    constant_time_compare(&expected_signature(prefix, secret_key), presented)
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterated_sha256_deterministic() {
        let a = iterated_sha256("dynzup-keysecret", SIGNATURE_ROUNDS);
        let b = iterated_sha256("dynzup-keysecret", SIGNATURE_ROUNDS);

        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_iterated_sha256_round_count_matters() {
        let eight = iterated_sha256("value", 8);
        let seven = iterated_sha256("value", 7);
        let nine = iterated_sha256("value", 9);

        assert_ne!(eight, seven);
        assert_ne!(eight, nine);
    }

    #[test]
    fn test_iterated_sha256_single_round_is_plain_sha256() {
        let single = iterated_sha256("value", 1);
        let plain = hex::encode(sha2::Sha256::digest("value".as_bytes()));

        assert_eq!(single, plain);
    }

    #[test]
    fn test_iterated_sha256_zero_rounds_is_identity() {
        assert_eq!(iterated_sha256("value", 0), "value");
    }

    #[test]
    fn test_verify_signature_accepts_expected() {
        let signature = expected_signature("dynzup-key", "secret");

        assert!(verify_signature("dynzup-key", "secret", &signature));
    }

    #[test]
    fn test_verify_signature_rejects_other_strings() {
        let signature = expected_signature("dynzup-key", "secret");

        assert!(!verify_signature("dynzup-key", "secret", ""));
        assert!(!verify_signature("dynzup-key", "secret", "deadbeef"));
        assert!(!verify_signature("dynzup-key", "secret", &signature[..63]));
        assert!(!verify_signature("dynzup-key", "secret", &signature.to_uppercase()));
    }

    #[test]
    fn test_verify_signature_prefix_is_part_of_derivation() {
        let signature = expected_signature("dynzup-key", "secret");

        assert!(!verify_signature("other-prefix", "secret", &signature));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc", "abc"));
        assert!(!constant_time_compare("abc", "abd"));
        assert!(!constant_time_compare("abc", "abcd"));
    }
}
