//! Webhook error types for billing webhook handling.
//!
//! Defines every error condition on the request path, with HTTP status code
//! mapping and the message that is safe to return to the provider.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur during webhook processing.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Signature header missing, malformed, or not matching the body.
    #[error("Invalid signature.")]
    InvalidSignature,

    /// Body exceeded the configured size cap.
    #[error("Payload too large.")]
    PayloadTooLarge,

    /// Body could not be read or parsed into a webhook event.
    #[error("Webhook error: {0}")]
    Parse(String),

    /// The event name is not one the receiver recognizes.
    #[error("Unknown event name: {event_name} for order: {order_identifier} ({order_id})")]
    UnknownEvent {
        event_name: String,
        order_identifier: String,
        order_id: String,
    },

    /// A dispatch hook failed with a message that may be shown to the caller.
    #[error("Webhook error: {0}")]
    Processing(String),

    /// A dispatch hook failed in a way that has no client-facing message.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WebhookError {
    /// Creates an unknown-event error from the offending payload fields.
    pub fn unknown_event(
        event_name: impl Into<String>,
        order_identifier: impl Into<String>,
        order_id: impl Into<String>,
    ) -> Self {
        WebhookError::UnknownEvent {
            event_name: event_name.into(),
            order_identifier: order_identifier.into(),
            order_id: order_id.into(),
        }
    }

    /// Maps the error to the HTTP status code returned to the provider.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::InvalidSignature
            | WebhookError::Parse(_)
            | WebhookError::UnknownEvent { .. }
            | WebhookError::Processing(_) => StatusCode::BAD_REQUEST,

            WebhookError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,

            WebhookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message placed in the response body.
    ///
    /// Internal errors never expose their detail.
    pub fn client_message(&self) -> String {
        match self {
            WebhookError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for WebhookError {
    fn from(err: serde_json::Error) -> Self {
        WebhookError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ══════════════════════════════════════════════════════════════
    // Message Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn invalid_signature_message_reveals_nothing_else() {
        let err = WebhookError::InvalidSignature;
        assert_eq!(err.client_message(), "Invalid signature.");
    }

    #[test]
    fn parse_error_is_prefixed() {
        let err = WebhookError::Parse("expected value at line 1 column 1".to_string());
        assert_eq!(
            err.client_message(),
            "Webhook error: expected value at line 1 column 1"
        );
    }

    #[test]
    fn unknown_event_embeds_name_and_order() {
        let err = WebhookError::unknown_event("order_teleported", "ORD-9", "o9");
        assert_eq!(
            err.client_message(),
            "Unknown event name: order_teleported for order: ORD-9 (o9)"
        );
    }

    #[test]
    fn processing_error_is_prefixed() {
        let err = WebhookError::Processing("fulfillment offline".to_string());
        assert_eq!(err.client_message(), "Webhook error: fulfillment offline");
    }

    #[test]
    fn internal_error_hides_detail() {
        let err = WebhookError::Internal("pool exhausted".to_string());
        assert_eq!(err.client_message(), "Internal server error");
        assert_eq!(format!("{}", err), "Internal error: pool exhausted");
    }

    #[test]
    fn serde_error_converts_to_parse() {
        let err: WebhookError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, WebhookError::Parse(_)));
    }

    // ══════════════════════════════════════════════════════════════
    // Status Code Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn client_errors_return_bad_request() {
        assert_eq!(
            WebhookError::InvalidSignature.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::Parse("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::unknown_event("a", "b", "c").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::Processing("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn oversized_body_returns_payload_too_large() {
        let err = WebhookError::PayloadTooLarge;
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.client_message(), "Payload too large.");
    }

    #[test]
    fn internal_error_returns_server_error() {
        let err = WebhookError::Internal("x".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
