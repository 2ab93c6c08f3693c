//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Flat success/message response used by state-changing endpoints
///
/// The `{success, message}` shape is a compatibility surface consumed by
/// existing clients and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,
}

impl StatusResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failure response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
