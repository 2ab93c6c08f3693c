//! Configuration for the token service

use jsonwebtoken::Algorithm;

use crate::domain::token::TOKEN_TTL_DAYS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Signing secret
    pub secret: String,
    /// Signing algorithm
    pub algorithm: Algorithm,
    /// Token validity window in days
    pub token_ttl_days: i64,
}

impl TokenServiceConfig {
    /// Creates a configuration with the given secret and the standard
    /// HS256 algorithm and 7-day window
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl_days: TOKEN_TTL_DAYS,
        }
    }

    /// Overrides the validity window in days
    pub fn with_ttl_days(mut self, days: i64) -> Self {
        self.token_ttl_days = days;
        self
    }
}
