//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the webhook routes with the service middleware
//! stack: request ids, tracing, timeout and the body size cap.

pub mod webhook;

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use webhook::{webhook_router, WebhookAppState, DEFAULT_WEBHOOK_PATH};

use webhook::handlers::timeout_as_json;

/// Build the full service router.
///
/// Layers, outermost first: assign `x-request-id`, propagate it to the
/// response, trace the request, render timeouts as JSON, enforce the request
/// timeout. Bodies over `max_body_bytes` are refused by the webhook handler
/// with a JSON 413.
pub fn app_router(
    state: WebhookAppState,
    webhook_path: &str,
    request_timeout: Duration,
    max_body_bytes: usize,
) -> Router {
    webhook_router(webhook_path)
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::map_response(timeout_as_json))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
