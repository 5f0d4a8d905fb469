//! HandleBillingWebhookHandler - Command handler for billing provider webhooks.

use std::sync::Arc;

use bytes::Bytes;

use crate::domain::billing::{EventKind, WebhookError, WebhookSignatureVerifier};
use crate::ports::BillingEventHandler;

/// Command to handle a billing webhook delivery.
#[derive(Debug, Clone)]
pub struct HandleBillingWebhookCommand {
    /// Raw request body, exactly as received.
    pub payload: Bytes,
    /// Value of the `x-signature` header, if present.
    pub signature: Option<String>,
}

/// Result of webhook processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleBillingWebhookResult {
    /// Order event passed to the order hook.
    OrderProcessed { kind: EventKind, order_id: String },
    /// Subscription or license event acknowledged.
    Acknowledged { kind: EventKind, order_id: String },
}

/// Handler for processing billing provider webhooks.
///
/// Verifies the signature over the raw payload, parses the event and routes
/// it to the configured `BillingEventHandler`.
pub struct HandleBillingWebhookHandler {
    verifier: Arc<WebhookSignatureVerifier>,
    event_handler: Arc<dyn BillingEventHandler>,
}

impl HandleBillingWebhookHandler {
    pub fn new(
        verifier: Arc<WebhookSignatureVerifier>,
        event_handler: Arc<dyn BillingEventHandler>,
    ) -> Self {
        Self {
            verifier,
            event_handler,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleBillingWebhookCommand,
    ) -> Result<HandleBillingWebhookResult, WebhookError> {
        // 1. Verify signature over the raw bytes, then parse
        let signature = cmd.signature.as_deref().ok_or_else(|| {
            tracing::debug!("rejecting webhook: missing x-signature header");
            WebhookError::InvalidSignature
        })?;

        let event = self.verifier.verify_and_parse(&cmd.payload, signature)?;

        // 2. Route by event name
        let Some(kind) = event.kind() else {
            return Err(WebhookError::unknown_event(
                event.event_name(),
                event.order_identifier(),
                event.order_id(),
            ));
        };

        let order_id = event.order_id().to_string();

        if kind.is_order() {
            self.event_handler.on_order_event(kind, &event).await?;
            Ok(HandleBillingWebhookResult::OrderProcessed { kind, order_id })
        } else {
            self.event_handler.on_acknowledged_event(kind, &event).await?;
            Ok(HandleBillingWebhookResult::Acknowledged { kind, order_id })
        }
    }
}
