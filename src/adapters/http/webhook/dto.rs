//! HTTP DTOs (Data Transfer Objects) for webhook endpoints.
//!
//! The request body is deliberately not a DTO: it is taken as raw bytes so
//! the signature can be checked before any parsing.

use serde::Serialize;

/// Acknowledgement returned for every accepted delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookAckResponse {
    pub received: bool,
}

impl WebhookAckResponse {
    pub fn received() -> Self {
        Self { received: true }
    }
}

/// Error response body. Every error path returns exactly one `message` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::new("Method not allowed")
    }

    pub fn request_timeout() -> Self {
        Self::new("Request timed out")
    }
}

/// Liveness response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
