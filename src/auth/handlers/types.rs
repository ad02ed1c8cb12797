//! Authentication Handler Types
//!
//! Request and response types for the login endpoint.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash, never logged)
    pub password: String,
}

/// Token response returned on successful login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed JWT access token
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl TokenResponse {
    /// Wrap an access token as a bearer-token response.
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
