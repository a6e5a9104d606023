//! Error body shared by every API endpoint.

use serde::{Deserialize, Serialize};

/// JSON body returned for any failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code (the [`ErrorKind`](crate::error::ErrorKind) display form).
    pub error: String,
    /// Human-readable message, safe to show to the user.
    pub message: String,
    /// Optional structured details (validation field errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiErrorResponse {
    /// Build an error body without details.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }
}
