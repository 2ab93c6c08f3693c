//! Session route handlers
//!
//! This module contains the session endpoints:
//! - Logout (clears the session cookie)
//! - Current-session introspection

pub mod logout;
pub mod session;

use std::sync::Arc;

use sg_core::services::token::TokenService;
use sg_shared::config::SessionConfig;

/// Shared application state for session routes
pub struct AppState {
    /// Token service verifying and issuing session credentials
    pub token_service: Arc<TokenService>,
    /// Session cookie configuration
    pub session: SessionConfig,
}
