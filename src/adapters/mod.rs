//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `billing` - Dispatch hook implementations
//! - `http` - Axum routes, handlers and middleware

pub mod billing;
pub mod http;

pub use billing::NoopBillingEventHandler;
pub use http::{app_router, WebhookAppState};
