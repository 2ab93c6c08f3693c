//! Request and response DTOs for the HTTP surface.

pub mod session;

pub use session::SessionResponse;
