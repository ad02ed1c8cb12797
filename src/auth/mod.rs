//! Authentication Module
//!
//! Credential verification and token-based authentication.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports
//! ├── password.rs  - Argon2id password hashing and verification
//! ├── tokens.rs    - JWT issuance and verification (TokenService)
//! └── handlers/    - HTTP handlers
//!     ├── types.rs - Request/response types
//!     ├── login.rs - POST /login
//!     └── me.rs    - GET /me
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: `POST /user` hashes the password and stores the user
//! 2. **Login**: `POST /login` verifies the credentials and returns a JWT
//! 3. **Authenticated request**: the bearer middleware verifies the token,
//!    re-resolves the user from the `sub` claim, and hands it to the handler
//!
//! # Security
//!
//! - Passwords are hashed with Argon2id (salted, memory-hard) before storage
//! - Tokens are HMAC-signed, carry only `sub`/`iat`/`exp`, and expire after
//!   a configured lifetime (default 30 minutes)
//! - All authentication failures look identical to the caller (401, one
//!   message); there is no token revocation, a token stays valid until expiry
//! - Plaintext passwords and token contents never appear in logs

/// Password hashing and verification
pub mod password;

/// JWT token issuance and verification
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and functions
pub use handlers::{get_me, login, LoginRequest, TokenResponse};
pub use password::{hash_password, verify_password, PasswordError};
pub use tokens::{AuthError, Claims, TokenConfig, TokenService};
