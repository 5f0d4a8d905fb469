//! Billing domain module.
//!
//! Handles authentication and classification of billing provider webhooks.
//!
//! # Module Structure
//!
//! - `event_kind` - Recognized provider event names
//! - `webhook_event` - Webhook payload shape
//! - `webhook_verifier` - HMAC-SHA256 signature verification
//! - `webhook_errors` - Request-path error type

mod event_kind;
mod webhook_errors;
mod webhook_event;
mod webhook_verifier;

pub use event_kind::EventKind;
pub use webhook_errors::WebhookError;
pub use webhook_event::{CustomData, EventAttributes, EventData, EventMeta, WebhookEvent};
pub use webhook_verifier::{sign_payload, WebhookSignatureVerifier};
