//! HTTP handlers for authentication endpoints.

/// Request/response types
pub mod types;

/// User authentication handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export handlers and types
pub use login::login;
pub use me::get_me;
pub use types::{LoginRequest, TokenResponse};
