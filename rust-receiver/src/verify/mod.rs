//! Verify-then-decrypt pipeline for inbound webhook payloads.
//!
//! [`EventVerifier`] is the single entry point. It authenticates an
//! envelope's signature, decrypts the payload and validates the resulting
//! event shape, in that order. Signature verification always runs first;
//! an unauthenticated payload is never decrypted.

pub mod cipher;
pub mod keys;
pub mod signature;

use serde_json::Value;

use crate::error::WebhookError;
use crate::events::{EncryptedEnvelope, EventKind, WebhookEvent};

/// Default signature prefix token.
///
/// A public domain-separation string, not a secret. Deployments override it
/// through `DYNZUP_KEY` (see [`Config`](crate::config::Config)).
pub const DEFAULT_SIGNATURE_PREFIX: &str = "dynzup-key";

/// Verifies and decrypts inbound webhook event payloads.
///
/// One instance per integration, holding that sender's shared secret.
/// Instances are immutable after construction and safe to share across
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct EventVerifier {
    secret_key: String,
    signature_prefix: String,
}

impl EventVerifier {
    /// Create a verifier using the default signature prefix.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_prefix(secret_key, DEFAULT_SIGNATURE_PREFIX)
    }

    /// Create a verifier with an explicit signature prefix token.
    pub fn with_prefix(secret_key: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            signature_prefix: prefix.into(),
        }
    }

    /// Verify and decrypt a raw hex ciphertext payload.
    ///
    /// Pipeline: check the signature, decrypt the whole payload, parse the
    /// plaintext as JSON and validate that its `event` tag is a recognized
    /// kind. The returned event's tag comes from the decrypted content.
    pub fn construct_event(
        &self,
        payload: &str,
        signature: &str,
    ) -> Result<WebhookEvent, WebhookError> {
        self.check_signature(signature)?;

        let iv = keys::derive_iv(&self.secret_key);
        let plaintext = cipher::decrypt_hex(&self.secret_key, &iv, payload)?;

        let body: Value = serde_json::from_str(&plaintext)?;
        let tag = body
            .get("event")
            .and_then(Value::as_str)
            .ok_or_else(|| WebhookError::MalformedPayload("missing event tag".to_string()))?;

        if EventKind::from_tag(tag).is_none() {
            return Err(WebhookError::InvalidEventType(tag.to_string()));
        }

        Ok(serde_json::from_value(body)?)
    }

    /// Verify and decrypt a structured envelope whose `data` field is still
    /// hex ciphertext.
    ///
    /// The envelope's `event` tag is validated against the recognized set
    /// before any decryption runs and is carried verbatim into the output;
    /// only the `data` field is decrypted and the parsed plaintext replaces
    /// the ciphertext. The tag is envelope metadata here: the signature
    /// authenticates the sender, but the encrypted content does not cover
    /// the tag.
    pub fn construct_event_from_envelope(
        &self,
        envelope: &EncryptedEnvelope,
        signature: &str,
    ) -> Result<WebhookEvent, WebhookError> {
        self.check_signature(signature)?;

        if EventKind::from_tag(&envelope.event).is_none() {
            return Err(WebhookError::InvalidEventType(envelope.event.clone()));
        }

        let iv = keys::derive_iv(&self.secret_key);
        let plaintext = cipher::decrypt_hex(&self.secret_key, &iv, &envelope.data)?;

        let data: Value = serde_json::from_str(&plaintext)?;

        Ok(serde_json::from_value(serde_json::json!({
            "event": envelope.event.clone(),
            "data": data,
        }))?)
    }

    fn check_signature(&self, signature: &str) -> Result<(), WebhookError> {
        if signature::verify_signature(&self.signature_prefix, &self.secret_key, signature) {
            Ok(())
        } else {
            Err(WebhookError::InvalidSignature)
        }
    }
}
