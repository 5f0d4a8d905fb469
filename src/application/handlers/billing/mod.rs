//! Billing handlers.
//!
//! ## Commands
//! - Processing billing provider webhooks

mod handle_billing_webhook;

pub use handle_billing_webhook::{
    HandleBillingWebhookCommand, HandleBillingWebhookHandler, HandleBillingWebhookResult,
};
