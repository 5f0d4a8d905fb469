//! Billing adapters - implementations of billing-related ports.
//!
//! - `NoopBillingEventHandler` - Logs and acknowledges every verified event

mod noop_event_handler;

pub use noop_event_handler::NoopBillingEventHandler;
