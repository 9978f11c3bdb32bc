//! Webhook endpoint handlers.
//!
//! Handlers stay thin: extract the signature header, run the
//! verify-then-decrypt pipeline and map the outcome to an HTTP status.
//! Rejections are logged here; the pipeline itself never logs.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::WebhookError;
use crate::events::WebhookEvent;
use crate::verify::EventVerifier;

/// Request header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "x-dynzup-signature";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<EventVerifier>,
}

impl AppState {
    pub fn new(verifier: EventVerifier) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Dynzup Webhook
// =============================================================================

/// Webhook response.
#[derive(Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<&'static str>,
}

/// Dynzup webhook endpoint.
///
/// The request body is the hex ciphertext; the signature travels in the
/// `X-Dynzup-Signature` header. The endpoint:
/// 1. Verifies the signature
/// 2. Decrypts and validates the event
/// 3. Returns 200 OK with the recognized event tag
pub async fn dynzup_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    info!(
        payload_length = body.len(),
        has_signature = !signature.is_empty(),
        "dynzup_webhook_received"
    );

    let event = match state.verifier.construct_event(&body, signature) {
        Ok(event) => event,
        Err(WebhookError::InvalidSignature) => {
            warn!("dynzup_signature_invalid");
            return (
                StatusCode::UNAUTHORIZED,
                Json(WebhookResponse {
                    status: "unauthorized",
                    event: None,
                }),
            );
        }
        Err(e) => {
            warn!(error = %e, "dynzup_event_rejected");
            return (
                StatusCode::BAD_REQUEST,
                Json(WebhookResponse {
                    status: "rejected",
                    event: None,
                }),
            );
        }
    };

    match &event {
        WebhookEvent::EndStep(data) => {
            info!(
                step_id = %data.step_id,
                step_name = %data.step_name,
                step_type = %data.step_type,
                "dynzup_end_step_verified"
            );
        }
    }

    (
        StatusCode::OK,
        Json(WebhookResponse {
            status: "verified",
            event: Some(event.kind().as_tag()),
        }),
    )
}
