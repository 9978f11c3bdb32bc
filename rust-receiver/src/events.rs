//! Wire types for encrypted envelopes and decrypted events.
//!
//! This module defines the message formats for:
//! - `EncryptedEnvelope`: the untrusted inbound shape, `data` still ciphertext
//! - `WebhookEvent`: the trusted output after verification and decryption

use std::fmt;

use serde::{Deserialize, Serialize};

/// Recognized webhook event kinds.
///
/// The set is closed: adding a kind here forces every `match` over it to be
/// revisited at compile time. Tags outside the set are rejected with
/// [`WebhookError::InvalidEventType`](crate::error::WebhookError), never
/// passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A workflow step completed.
    #[serde(rename = "zup.end_step")]
    EndStep,
}

impl EventKind {
    /// Parse a wire tag into a recognized kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "zup.end_step" => Some(EventKind::EndStep),
            _ => None,
        }
    }

    /// The wire tag for this kind.
    pub fn as_tag(&self) -> &'static str {
        match self {
            EventKind::EndStep => "zup.end_step",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Untrusted inbound envelope whose `data` field is still hex ciphertext.
///
/// The `event` tag here is plaintext metadata: the request signature covers
/// the sender, but the encrypted content does not cover the tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    /// Claimed event tag.
    pub event: String,
    /// Hex-encoded AES-256-CBC ciphertext.
    pub data: String,
}

/// A fully verified and decrypted webhook event.
///
/// Serialized shape matches the wire format: `{"event": <tag>, "data": {..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum WebhookEvent {
    /// A workflow step completed.
    #[serde(rename = "zup.end_step")]
    EndStep(EndStepData),
}

impl WebhookEvent {
    /// The kind discriminant of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            WebhookEvent::EndStep(_) => EventKind::EndStep,
        }
    }
}

/// Payload of a `zup.end_step` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndStepData {
    /// Identifier of the completed step.
    pub step_id: String,
    /// Human-readable step name.
    pub step_name: String,
    /// Step category, e.g. "ci".
    pub step_type: String,
}
