//! BillingEventHandler port - Extension point for verified billing events.
//!
//! The receiver authenticates and classifies events; what happens next
//! (fulfilling an order, recording a refund, syncing a subscription) belongs
//! to an implementation of this port.

use async_trait::async_trait;

use crate::domain::billing::{EventKind, WebhookEvent, WebhookError};

/// Receives verified webhook events after classification.
///
/// Implementations are called at most once per delivery and only after the
/// signature has been verified.
#[async_trait]
pub trait BillingEventHandler: Send + Sync {
    /// Called for `order_created` and `order_refunded`.
    ///
    /// Return `WebhookError::Processing` for failures the provider may see,
    /// `WebhookError::Internal` for anything else.
    async fn on_order_event(&self, kind: EventKind, event: &WebhookEvent)
        -> Result<(), WebhookError>;

    /// Called for recognized subscription and license events that are not
    /// otherwise actioned.
    async fn on_acknowledged_event(
        &self,
        kind: EventKind,
        event: &WebhookEvent,
    ) -> Result<(), WebhookError>;
}
