//! User data model, database operations, and HTTP handlers.

/// User model and database operations
pub mod db;

/// HTTP handlers for user endpoints
pub mod handlers;

// Re-export commonly used types
pub use db::User;
pub use handlers::{CreateUserRequest, UserResponse};
