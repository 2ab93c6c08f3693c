//! Domain-specific error types and error handling.

use thiserror::Error;

/// Token-related errors
///
/// Only configuration and signing defects are errors: a token that fails
/// verification is an expected outcome and is reported through
/// [`crate::domain::token::Verification`], never through this type.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Signing secret is missing or empty")]
    MissingSecret,

    #[error("Token generation failed")]
    SigningFailed,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
