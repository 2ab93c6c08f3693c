pub mod auth;
pub mod cors;

pub use auth::{SessionAuth, SessionContext};
pub use cors::create_cors;
