//! Billing webhook payload types.
//!
//! Only the fields the receiver routes on are captured; the rest of the
//! provider's payload is ignored.

use serde::Deserialize;

use super::event_kind::EventKind;

/// Billing provider webhook event.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    /// Event metadata (name and checkout custom data).
    pub meta: EventMeta,

    /// The order object the event refers to.
    pub data: EventData,
}

/// The `meta` block of a webhook event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventMeta {
    /// Raw event name, e.g. `order_created`.
    pub event_name: String,

    /// Data passed through from checkout. Absent when checkout carried none.
    #[serde(default)]
    pub custom_data: Option<CustomData>,
}

/// Caller-supplied checkout data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomData {
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// The `data` block of a webhook event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventData {
    /// Order id.
    pub id: String,

    pub attributes: EventAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventAttributes {
    /// Human-facing order identifier.
    pub identifier: String,
}

impl WebhookEvent {
    /// Parses an event from raw body bytes.
    pub fn from_slice(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }

    pub fn event_name(&self) -> &str {
        &self.meta.event_name
    }

    /// Parse the event name into a known kind.
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::parse(&self.meta.event_name)
    }

    pub fn order_id(&self) -> &str {
        &self.data.id
    }

    pub fn order_identifier(&self) -> &str {
        &self.data.attributes.identifier
    }

    pub fn user_id(&self) -> Option<&str> {
        self.meta
            .custom_data
            .as_ref()
            .and_then(|c| c.user_id.as_deref())
    }
}
