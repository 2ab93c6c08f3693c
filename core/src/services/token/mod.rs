//! Token service module for session credential management
//!
//! This module handles all token-related operations:
//! - Signed session token issuance (fixed 7-day validity window)
//! - Token verification against the configured secret and clock

mod clock;
mod config;
mod service;

pub use clock::{Clock, SystemClock};
pub use config::TokenServiceConfig;
pub use service::TokenService;
