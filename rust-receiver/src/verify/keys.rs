//! Deterministic IV derivation from the shared secret.

use sha2::{Digest, Sha512};

/// Cipher block and IV size in bytes.
pub const IV_LEN: usize = 16;

/// Derive the AES-CBC initialization vector from the shared secret.
///
/// The IV is the first 16 characters of the lowercase SHA-512 hex digest
/// of the secret key, taken as ASCII bytes. Same key, same IV: this is
/// derived key material tied 1:1 to the secret, not a per-message nonce.
/// The derivation lives in this one function so a transmitted-random-IV
/// scheme can replace it without touching callers.
pub fn derive_iv(secret_key: &str) -> [u8; IV_LEN] {
    let digest = hex::encode(Sha512::digest(secret_key.as_bytes()));

    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&digest.as_bytes()[..IV_LEN]);
    iv
}
