//! No-op implementation of BillingEventHandler.
//!
//! Logs each verified event and acknowledges it. This is the handler the
//! service runs with until order fulfillment and subscription sync are wired in.
//!
//! # Usage
//!
//! ```ignore
//! use billing_webhook::adapters::billing::NoopBillingEventHandler;
//!
//! let handler: Arc<dyn BillingEventHandler> = Arc::new(NoopBillingEventHandler::new());
//! ```

use async_trait::async_trait;

use crate::domain::billing::{EventKind, WebhookError, WebhookEvent};
use crate::ports::BillingEventHandler;

/// BillingEventHandler that logs and accepts every event.
#[derive(Debug, Clone, Default)]
pub struct NoopBillingEventHandler;

impl NoopBillingEventHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BillingEventHandler for NoopBillingEventHandler {
    async fn on_order_event(
        &self,
        kind: EventKind,
        event: &WebhookEvent,
    ) -> Result<(), WebhookError> {
        tracing::info!(
            event_name = %kind,
            order_id = event.order_id(),
            order_identifier = event.order_identifier(),
            user_id = event.user_id().unwrap_or("-"),
            "order event received"
        );
        Ok(())
    }

    async fn on_acknowledged_event(
        &self,
        kind: EventKind,
        event: &WebhookEvent,
    ) -> Result<(), WebhookError> {
        tracing::debug!(
            event_name = %kind,
            order_id = event.order_id(),
            "event acknowledged without action"
        );
        Ok(())
    }
}
