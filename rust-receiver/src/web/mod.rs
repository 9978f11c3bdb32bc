//! Web server module for handling inbound webhooks.
//!
//! A thin axum layer over the verifier:
//! - Receives Dynzup webhooks
//! - Extracts the signature header and runs the verify-then-decrypt pipeline
//! - Maps pipeline errors to HTTP statuses
//!
//! No signature or decryption logic lives here.

pub mod handlers;

pub use handlers::{
    dynzup_webhook, health, AppState, HealthResponse, WebhookResponse, SIGNATURE_HEADER,
};
