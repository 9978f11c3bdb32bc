//! Configuration module for environment variable parsing.
//!
//! All environment access lives here: values load once at startup and are
//! injected explicitly. The verification pipeline itself never reads the
//! process environment.

use std::env;

use crate::verify::DEFAULT_SIGNATURE_PREFIX;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Shared secret for signature verification and payload decryption.
    /// Must be exactly 32 bytes or decryption will fail.
    pub secret_key: Option<String>,

    /// Public signature prefix token (domain separation, not a secret)
    pub signature_prefix: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            secret_key: env::var("DYNZUP_SECRET_KEY").ok(),

            signature_prefix: env::var("DYNZUP_KEY")
                .unwrap_or_else(|_| DEFAULT_SIGNATURE_PREFIX.to_string()),
        }
    }
}
