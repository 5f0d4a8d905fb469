//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Webhook Ports
//!
//! - `BillingEventHandler` - Dispatch hook for verified billing events

mod billing_event_handler;

pub use billing_event_handler::BillingEventHandler;
