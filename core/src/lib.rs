//! # Session Gate Core
//!
//! Core domain layer for the Session Gate backend. This crate contains the
//! token entities, the token service that issues and verifies signed
//! session credentials, and the domain error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::token::{Claims, Verification};
pub use errors::{DomainError, DomainResult, TokenError};
pub use services::token::{Clock, SystemClock, TokenService, TokenServiceConfig};
