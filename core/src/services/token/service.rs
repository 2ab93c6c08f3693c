//! Session token issuance and verification.
//!
//! The service turns a principal identifier into a signed, expiring
//! credential and turns a presented credential back into the identifier.
//! Issuance can fail (configuration or signing defects propagate);
//! verification cannot: it is a total function from any input string to
//! [`Verification`], and the rejection reason is only ever logged.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domain::token::{Claims, Verification};
use crate::errors::{DomainResult, TokenError};

use super::clock::{Clock, SystemClock};
use super::config::TokenServiceConfig;

/// Service issuing and verifying signed session tokens
///
/// Both operations are pure and stateless aside from the secret fixed at
/// construction, so a single instance can be shared freely across
/// concurrent callers.
pub struct TokenService<C: Clock = SystemClock> {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: C,
}

impl TokenService<SystemClock> {
    /// Creates a token service backed by the system clock
    ///
    /// Fails when the configured secret is absent or blank: signing with
    /// an empty key is a deployment defect and must surface immediately.
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> TokenService<C> {
    /// Creates a token service with an explicit clock
    pub fn with_clock(config: TokenServiceConfig, clock: C) -> DomainResult<Self> {
        if config.secret.trim().is_empty() {
            return Err(TokenError::MissingSecret.into());
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        // Expiry is checked against the injected clock, not library time.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            clock,
        })
    }

    /// Issues a signed session token for an already-authenticated subject
    ///
    /// Embeds the subject and the issuance instant, with expiry fixed at
    /// the configured window (7 days by default). Pure computation, no
    /// I/O; the caller is responsible for having authenticated the
    /// principal beforehand.
    pub fn issue(&self, subject: &str) -> DomainResult<String> {
        let claims = Claims::new(subject, self.clock.now(), self.config.token_ttl_days);

        let header = Header::new(self.config.algorithm);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|_| TokenError::SigningFailed.into())
    }

    /// Verifies a presented token of unconstrained origin
    ///
    /// Accepts the token only when the signature matches the configured
    /// secret AND the current instant is before the embedded expiry.
    /// Every failure collapses into [`Verification::Invalid`]; callers
    /// never learn the reason, which is logged for diagnostics only.
    pub fn verify(&self, token: &str) -> Verification {
        let claims = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(error) => {
                debug!(reason = %error, "rejected session token");
                return Verification::Invalid;
            }
        };

        if claims.is_expired_at(self.clock.now()) {
            debug!(subject = %claims.sub, "rejected expired session token");
            return Verification::Invalid;
        }

        match claims.issued_at() {
            Some(issued_at) => Verification::Valid {
                subject: claims.sub,
                issued_at,
            },
            None => {
                debug!("rejected session token with out-of-range issuance timestamp");
                Verification::Invalid
            }
        }
    }
}
