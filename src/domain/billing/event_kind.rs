//! Billing provider event names.

use std::fmt;

/// Event names the receiver recognizes.
///
/// Order events are routed to the order hook. Subscription and license
/// events are accepted and routed to the acknowledgement hook without
/// further action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    OrderCreated,
    OrderRefunded,
    SubscriptionCreated,
    SubscriptionCancelled,
    SubscriptionResumed,
    SubscriptionExpired,
    SubscriptionPaused,
    SubscriptionUnpaused,
    SubscriptionPaymentFailed,
    SubscriptionPaymentSuccess,
    SubscriptionPaymentRecovered,
    LicenseKeyCreated,
}

impl EventKind {
    /// Every recognized kind, in wire-name order.
    pub const ALL: [EventKind; 12] = [
        EventKind::OrderCreated,
        EventKind::OrderRefunded,
        EventKind::SubscriptionCreated,
        EventKind::SubscriptionCancelled,
        EventKind::SubscriptionResumed,
        EventKind::SubscriptionExpired,
        EventKind::SubscriptionPaused,
        EventKind::SubscriptionUnpaused,
        EventKind::SubscriptionPaymentFailed,
        EventKind::SubscriptionPaymentSuccess,
        EventKind::SubscriptionPaymentRecovered,
        EventKind::LicenseKeyCreated,
    ];

    /// Parse an event name. Returns `None` for anything unrecognized,
    /// including the empty string.
    pub fn parse(name: &str) -> Option<Self> {
        let kind = match name {
            "order_created" => Self::OrderCreated,
            "order_refunded" => Self::OrderRefunded,
            "subscription_created" => Self::SubscriptionCreated,
            "subscription_cancelled" => Self::SubscriptionCancelled,
            "subscription_resumed" => Self::SubscriptionResumed,
            "subscription_expired" => Self::SubscriptionExpired,
            "subscription_paused" => Self::SubscriptionPaused,
            "subscription_unpaused" => Self::SubscriptionUnpaused,
            "subscription_payment_failed" => Self::SubscriptionPaymentFailed,
            "subscription_payment_success" => Self::SubscriptionPaymentSuccess,
            "subscription_payment_recovered" => Self::SubscriptionPaymentRecovered,
            "license_key_created" => Self::LicenseKeyCreated,
            _ => return None,
        };
        Some(kind)
    }

    /// The provider's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderCreated => "order_created",
            Self::OrderRefunded => "order_refunded",
            Self::SubscriptionCreated => "subscription_created",
            Self::SubscriptionCancelled => "subscription_cancelled",
            Self::SubscriptionResumed => "subscription_resumed",
            Self::SubscriptionExpired => "subscription_expired",
            Self::SubscriptionPaused => "subscription_paused",
            Self::SubscriptionUnpaused => "subscription_unpaused",
            Self::SubscriptionPaymentFailed => "subscription_payment_failed",
            Self::SubscriptionPaymentSuccess => "subscription_payment_success",
            Self::SubscriptionPaymentRecovered => "subscription_payment_recovered",
            Self::LicenseKeyCreated => "license_key_created",
        }
    }

    /// True for the kinds handled by the order hook.
    pub fn is_order(&self) -> bool {
        matches!(self, Self::OrderCreated | Self::OrderRefunded)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
