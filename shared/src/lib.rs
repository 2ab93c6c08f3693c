//! Shared utilities and common types for the Session Gate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Common type definitions

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, Environment, JwtConfig, LoggingConfig, ServerConfig, SessionConfig,
};
pub use errors::ConfigError;
pub use types::StatusResponse;
