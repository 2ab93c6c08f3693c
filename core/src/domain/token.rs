//! Token entities for signed session credentials.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Session token validity window (7 days)
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Claims structure for the signed token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the authenticated principal's identifier)
    pub sub: String,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a session token issued at `issued_at`
    ///
    /// The expiry is fixed at `ttl_days` after issuance.
    pub fn new(subject: impl Into<String>, issued_at: DateTime<Utc>, ttl_days: i64) -> Self {
        let expiry = issued_at + Duration::days(ttl_days);

        Self {
            sub: subject.into(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks whether the claims are expired as of `now`
    ///
    /// A token is usable strictly before its expiry instant; at `exp`
    /// itself it is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Gets the issuance instant from the claims
    ///
    /// Returns `None` when the embedded timestamp is out of range, which
    /// only happens for payloads this service never produced.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    /// Gets the expiry instant from the claims
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Outcome of verifying a presented token
///
/// Verification is a total function from string to this type: every
/// failure mode (malformed input, bad signature, expired token, wrong
/// secret) collapses into `Invalid`. Callers must treat all invalid
/// tokens identically, so the reason is never part of the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Signature correct and unexpired
    Valid {
        /// Subject embedded at issuance
        subject: String,
        /// Issuance instant embedded at issuance
        issued_at: DateTime<Utc>,
    },
    /// Anything else, permanently
    Invalid,
}

impl Verification {
    /// Whether the token was accepted
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid { .. })
    }

    /// The verified subject, if the token was accepted
    pub fn subject(&self) -> Option<&str> {
        match self {
            Verification::Valid { subject, .. } => Some(subject),
            Verification::Invalid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_embed_subject_and_window() {
        let issued_at = Utc::now();
        let claims = Claims::new("user-42", issued_at, TOKEN_TTL_DAYS);

        assert_eq!(claims.sub, "user-42");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_claims_expiry_boundary() {
        let issued_at = Utc::now();
        let claims = Claims::new("user-42", issued_at, TOKEN_TTL_DAYS);

        let just_before = issued_at + Duration::days(TOKEN_TTL_DAYS) - Duration::seconds(1);
        let at_expiry = issued_at + Duration::days(TOKEN_TTL_DAYS);
        let just_after = at_expiry + Duration::seconds(1);

        assert!(!claims.is_expired_at(just_before));
        assert!(claims.is_expired_at(at_expiry));
        assert!(claims.is_expired_at(just_after));
    }

    #[test]
    fn test_claims_timestamp_accessors() {
        let issued_at = Utc::now();
        let claims = Claims::new("user-42", issued_at, TOKEN_TTL_DAYS);

        assert_eq!(claims.issued_at().unwrap().timestamp(), claims.iat);
        assert_eq!(claims.expires_at().unwrap().timestamp(), claims.exp);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new("user-42", Utc::now(), TOKEN_TTL_DAYS);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_verification_accessors() {
        let valid = Verification::Valid {
            subject: "user-42".to_string(),
            issued_at: Utc::now(),
        };

        assert!(valid.is_valid());
        assert_eq!(valid.subject(), Some("user-42"));

        assert!(!Verification::Invalid.is_valid());
        assert_eq!(Verification::Invalid.subject(), None);
    }
}
