//! Authentication and session configuration

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::ConfigError;

/// Default session token validity window in days
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token validity window in days
    #[serde(default = "default_ttl_days")]
    pub token_ttl_days: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_ttl_days: default_ttl_days(),
        }
    }

    /// Set the token validity window in days
    pub fn with_ttl_days(mut self, days: i64) -> Self {
        self.token_ttl_days = days;
        self
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session cookie name
    pub cookie_name: String,

    /// Session cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Session cookie SameSite attribute
    pub same_site: String,

    /// Session cookie HttpOnly flag
    #[serde(default = "default_http_only")]
    pub http_only: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("token"),
            secure: false, // Set to true in production
            same_site: String::from("Lax"),
            http_only: default_http_only(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session cookie configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AuthConfig {
    /// Load authentication configuration from environment variables
    ///
    /// `TOKEN_SECRET` is mandatory: signing with an empty or default key
    /// would silently produce forgeable credentials, so an unset or blank
    /// secret is a hard configuration error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret =
            env::var("TOKEN_SECRET").map_err(|_| ConfigError::missing("TOKEN_SECRET"))?;
        if secret.trim().is_empty() {
            return Err(ConfigError::invalid("TOKEN_SECRET", "<blank>"));
        }

        let token_ttl_days = match env::var("TOKEN_TTL_DAYS") {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|days| *days > 0)
                .ok_or_else(|| ConfigError::invalid("TOKEN_TTL_DAYS", raw))?,
            Err(_) => default_ttl_days(),
        };

        Ok(Self {
            jwt: JwtConfig {
                secret,
                token_ttl_days,
            },
            session: SessionConfig::default(),
        })
    }

    /// Get the JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }

    /// Get the session cookie name
    pub fn cookie_name(&self) -> &str {
        &self.session.cookie_name
    }
}

fn default_ttl_days() -> i64 {
    DEFAULT_TOKEN_TTL_DAYS
}

fn default_http_only() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_ttl_days(14);

        assert_eq!(config.secret, "my-secret");
        assert_eq!(config.token_ttl_days, 14);
    }

    #[test]
    fn test_jwt_config_default_ttl() {
        let config = JwtConfig::new("my-secret");
        assert_eq!(config.token_ttl_days, 7);
    }

    #[test]
    fn test_session_config_default() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "token");
        assert!(config.http_only);
        assert!(!config.secure);
        assert_eq!(config.same_site, "Lax");
    }
}
