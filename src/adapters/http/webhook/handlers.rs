//! HTTP handlers for webhook endpoints.
//!
//! These handlers connect Axum routes to the webhook command handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use http::HeaderName;

use crate::application::handlers::billing::{
    HandleBillingWebhookCommand, HandleBillingWebhookHandler, HandleBillingWebhookResult,
};
use crate::domain::billing::{WebhookError, WebhookSignatureVerifier};
use crate::ports::BillingEventHandler;

use super::dto::{ErrorResponse, HealthResponse, WebhookAckResponse};

/// Header carrying the lowercase hex HMAC-SHA256 of the raw body.
pub const SIGNATURE_HEADER: HeaderName = HeaderName::from_static("x-signature");

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for webhook endpoints.
///
/// Built once at startup and never mutated; cloned per request.
#[derive(Clone)]
pub struct WebhookAppState {
    pub verifier: Arc<WebhookSignatureVerifier>,
    pub event_handler: Arc<dyn BillingEventHandler>,
}

impl WebhookAppState {
    pub fn new(
        verifier: Arc<WebhookSignatureVerifier>,
        event_handler: Arc<dyn BillingEventHandler>,
    ) -> Self {
        Self {
            verifier,
            event_handler,
        }
    }

    pub fn webhook_handler(&self) -> HandleBillingWebhookHandler {
        HandleBillingWebhookHandler::new(self.verifier.clone(), self.event_handler.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/webhooks/billing - Handle billing provider webhook events
///
/// The body is extracted as `Bytes`; the signature covers those exact bytes.
/// Body extraction failures (including the size cap) are answered in the
/// same JSON shape as every other error.
pub async fn handle_billing_webhook(
    State(state): State<WebhookAppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, WebhookApiError> {
    let body = body.map_err(body_rejection_to_error)?;

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let handler = state.webhook_handler();
    let cmd = HandleBillingWebhookCommand {
        payload: body,
        signature,
    };

    match handler.handle(cmd).await? {
        HandleBillingWebhookResult::OrderProcessed { kind, order_id } => {
            tracing::info!(event_name = %kind, %order_id, "billing webhook processed");
        }
        HandleBillingWebhookResult::Acknowledged { kind, order_id } => {
            tracing::info!(event_name = %kind, %order_id, "billing webhook acknowledged");
        }
    }

    Ok(Json(WebhookAckResponse::received()))
}

fn body_rejection_to_error(rejection: BytesRejection) -> WebhookError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        WebhookError::PayloadTooLarge
    } else {
        WebhookError::Parse(rejection.body_text())
    }
}

/// Any non-POST method on the webhook path.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::method_not_allowed()),
    )
}

/// Gives the timeout layer's empty 408 the standard error body.
pub async fn timeout_as_json(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorResponse::request_timeout()),
        )
            .into_response();
    }
    response
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts webhook errors to HTTP responses.
#[derive(Debug)]
pub struct WebhookApiError(WebhookError);

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            WebhookError::InvalidSignature => {
                tracing::warn!("billing webhook rejected: invalid signature");
            }
            WebhookError::UnknownEvent { event_name, .. } => {
                tracing::warn!(%event_name, "billing webhook rejected: unknown event");
            }
            WebhookError::PayloadTooLarge => {
                tracing::warn!("billing webhook rejected: body exceeds size cap");
            }
            WebhookError::Parse(detail) | WebhookError::Processing(detail) => {
                tracing::warn!(%detail, "billing webhook failed");
            }
            WebhookError::Internal(detail) => {
                tracing::error!(%detail, "billing webhook failed unexpectedly");
            }
        }

        let status = self.0.status_code();
        let body = ErrorResponse::new(self.0.client_message());
        (status, Json(body)).into_response()
    }
}
