//! Domain entities and value objects.

pub mod token;

pub use token::{Claims, Verification, TOKEN_TTL_DAYS};
