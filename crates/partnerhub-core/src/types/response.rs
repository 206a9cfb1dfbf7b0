//! Response types for the dashboard API.

use serde::{Deserialize, Serialize};

/// Standard response envelope returned by every dashboard API endpoint.
///
/// The server signals failure both through HTTP status codes and through
/// `success: false` bodies; callers must check both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message, typically present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Consume the envelope, returning the payload of a successful response.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }

    /// The failure message, or a generic fallback.
    pub fn failure_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Request was not successful".to_string())
    }
}
