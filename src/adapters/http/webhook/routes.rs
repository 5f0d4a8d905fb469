//! Axum router configuration for webhook endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{handle_billing_webhook, health, method_not_allowed, WebhookAppState};

/// Default mount path for the billing webhook.
pub const DEFAULT_WEBHOOK_PATH: &str = "/api/webhooks/billing";

/// Create the billing webhook router.
///
/// Webhooks don't require user authentication; they are verified via
/// signature. Every method other than POST on `path` gets a JSON 405.
///
/// # Routes
/// - `POST {path}` - Handle billing provider webhooks
pub fn webhook_routes(path: &str) -> Router<WebhookAppState> {
    Router::new().route(
        path,
        post(handle_billing_webhook).fallback(method_not_allowed),
    )
}

/// Create the complete webhook service router.
///
/// # Routes
/// - `GET /health` - Liveness probe
/// - `POST {path}` - Handle billing provider webhooks
pub fn webhook_router(path: &str) -> Router<WebhookAppState> {
    Router::new()
        .route("/health", get(health))
        .merge(webhook_routes(path))
}
