//! Dynzup webhook receiver - verify-then-decrypt event pipeline.
//!
//! This library backs the `dynzup-web` binary and can be embedded directly
//! by host applications that receive Dynzup callbacks:
//! - `verify`: signature checking, IV derivation and payload decryption
//! - `events`: wire types for encrypted envelopes and decrypted events
//! - `web`: thin axum receiver fronting the verifier
//!
//! ## Architecture
//!
//! ```text
//! Webhook → Web Server → EventVerifier → WebhookEvent → host application
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod verify;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use error::{DecryptionError, WebhookError};
pub use events::{EncryptedEnvelope, EndStepData, EventKind, WebhookEvent};
pub use verify::{EventVerifier, DEFAULT_SIGNATURE_PREFIX};
pub use web::AppState;
