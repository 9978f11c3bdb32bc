//! Dynzup web receiver - thin webhook verification server.
//!
//! Receives Dynzup webhooks, verifies their signature, decrypts the
//! payload and logs the resulting event. Verification and decryption live
//! in the `dynzup` library; this binary only wires configuration, logging
//! and HTTP transport around it.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dynzup::web::{dynzup_webhook, health, AppState};
use dynzup::{Config, EventVerifier};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("web_server_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        secret_key_configured = config.secret_key.is_some(),
        signature_prefix = %config.signature_prefix,
        "config_loaded"
    );

    let secret_key = config
        .secret_key
        .clone()
        .context("DYNZUP_SECRET_KEY must be set")?;

    let verifier = EventVerifier::with_prefix(secret_key, config.signature_prefix.clone());
    let state = AppState::new(verifier);

    // Build the router
    let app = Router::new()
        .route("/health", get(health))
        .route("/webhooks/dynzup", post(dynzup_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "web_server_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("web_server_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("web_server_shutting_down");
}
