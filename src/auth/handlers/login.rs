//! Login Handler
//!
//! Implements `POST /login`.
//!
//! # Authentication Process
//!
//! 1. Look up the user by email
//! 2. Verify the password against the stored Argon2id hash
//! 3. Issue a JWT with the user's email as subject
//!
//! # Security
//!
//! - Unknown email and wrong password both answer 401 with the same body,
//!   so the endpoint cannot be used to enumerate accounts
//! - A stored hash that fails to parse is a 500 (corrupt data), never a
//!   silent "no match"
//! - Passwords are never logged

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::PasswordError;
use crate::auth::verify_password;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::db::get_user_by_email;

/// Login handler
///
/// Verifies the submitted credentials and returns a bearer token.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password (indistinguishable)
/// * `500 Internal Server Error` - database failure, corrupt stored hash, or
///   token signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.db, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed for: {}", request.email);
            ApiError::invalid_credentials()
        })?;

    let valid = verify_password(&user.password_hash, &request.password).map_err(|e| {
        match e {
            PasswordError::MalformedHash => {
                tracing::error!("Stored password hash for {} is malformed", user.email);
            }
            PasswordError::Hashing(ref msg) => {
                tracing::error!("Password verification error: {msg}");
            }
        }
        ApiError::from(e)
    })?;

    if !valid {
        tracing::warn!("Login failed for: {}", request.email);
        return Err(ApiError::invalid_credentials());
    }

    let token = state.tokens.issue(&user.email)?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(TokenResponse::bearer(token)))
}
