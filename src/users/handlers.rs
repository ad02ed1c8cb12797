//! User Handlers
//!
//! HTTP handlers for user registration and lookup:
//!
//! - `POST /user` - Create a user (hashes the password before storage)
//! - `GET /user/{id}` - Get a user's public fields
//!
//! # Security
//!
//! - Passwords are hashed with Argon2id before storage
//! - Responses never include the password hash

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::hash_password;
use crate::error::ApiError;
use crate::users::db::{create_user as insert_user, get_user_by_email, get_user_by_id, User};

/// Minimum accepted password length at registration.
///
/// Length policy lives here, in the handler, not in the hashing module.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Create user request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateUserRequest {
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Plaintext password (hashed before storage, never persisted)
    pub password: String,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Create user handler
///
/// Validates the request, hashes the password, and inserts the user.
///
/// # Errors
///
/// * `400 Bad Request` - invalid email or too-short password
/// * `409 Conflict` - a user with this email already exists
/// * `500 Internal Server Error` - hashing or database failure
pub async fn create_user(
    State(pool): State<SqlitePool>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    tracing::info!("Create user request for email: {}", request.email);

    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::bad_request("Invalid email format"));
    }

    if request.password.len() < MIN_PASSWORD_LENGTH {
        tracing::warn!("Password too short");
        return Err(ApiError::bad_request(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::conflict("Email already registered"));
    }

    let password_hash = hash_password(&request.password).map_err(|e| {
        tracing::error!("Failed to hash password: {e}");
        ApiError::from(e)
    })?;

    let user = insert_user(&pool, &request.name, &request.email, &password_hash)
        .await
        .map_err(|e| {
            // The pre-check races with concurrent registrations; the unique
            // index is the authority.
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                ApiError::conflict("Email already registered")
            } else {
                ApiError::from(e)
            }
        })?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok(Json(UserResponse::from(user)))
}

/// Get user handler
///
/// # Errors
///
/// * `404 Not Found` - no user with this id
pub async fn get_user(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = get_user_by_id(&pool, id).await?.ok_or_else(|| {
        ApiError::not_found(format!("User with the id {id} is not available"))
    })?;

    Ok(Json(UserResponse::from(user)))
}
