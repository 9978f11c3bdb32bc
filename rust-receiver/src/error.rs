//! Error types for the verify-then-decrypt pipeline.
//!
//! Every variant is fatal to the current call: the pipeline never retries
//! and never returns a partial result. The core also never logs a failure;
//! errors propagate to the caller, which decides how to report them.

use thiserror::Error;

/// Errors surfaced by [`EventVerifier`](crate::verify::EventVerifier).
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The presented signature does not match the derived expected
    /// signature. Raised before any decryption is attempted.
    #[error("invalid signature")]
    InvalidSignature,

    /// The event tag is not a member of the recognized set.
    #[error("invalid event type: {0}")]
    InvalidEventType(String),

    /// Cipher key, IV, padding or ciphertext was malformed.
    #[error("decryption failed: {0}")]
    Decryption(#[from] DecryptionError),

    /// Decrypted plaintext is not valid structured data.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl From<serde_json::Error> for WebhookError {
    fn from(err: serde_json::Error) -> Self {
        WebhookError::MalformedPayload(err.to_string())
    }
}

/// Decryption failures, kept separate so callers can tell bad key material
/// apart from bad ciphertext.
#[derive(Debug, Error)]
pub enum DecryptionError {
    /// The secret key byte length does not match the cipher key size.
    #[error("secret key must be {expected} bytes, got {actual}")]
    KeyLength { expected: usize, actual: usize },

    /// The ciphertext is not valid hexadecimal.
    #[error("ciphertext is not valid hex: {0}")]
    CiphertextEncoding(#[from] hex::FromHexError),

    /// Block decryption failed: truncated ciphertext or invalid padding.
    #[error("ciphertext is not block-aligned or padding is invalid")]
    Cipher,

    /// The decrypted bytes are not valid UTF-8.
    #[error("plaintext is not valid UTF-8")]
    PlaintextEncoding,
}
