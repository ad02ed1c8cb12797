//! Server setup: configuration, application state, and initialization.

/// Configuration loading and validation
pub mod config;

/// Application state and startup
pub mod init;

/// Shared application state
pub mod state;

pub use config::{Config, ConfigError};
pub use init::{build_state, create_app, InitError};
pub use state::AppState;
