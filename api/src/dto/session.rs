use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Introspection payload for the current session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Subject embedded in the session token
    pub subject: String,

    /// When the session token was issued
    pub issued_at: DateTime<Utc>,
}
