//! HTTP adapter for webhook endpoints.
//!
//! Exposes the billing webhook receiver via REST:
//! - `POST /api/webhooks/billing` - Handle billing provider webhooks
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{WebhookApiError, WebhookAppState, SIGNATURE_HEADER};
pub use routes::{webhook_router, webhook_routes, DEFAULT_WEBHOOK_PATH};
