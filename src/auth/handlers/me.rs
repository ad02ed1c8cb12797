//! Get Current User Handler
//!
//! Implements `GET /me`, which returns the authenticated user's public
//! fields. The route sits behind the bearer middleware, so by the time this
//! handler runs the token has been verified and the user re-resolved.

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::users::db::get_user_by_id;
use crate::users::UserResponse;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing/invalid token (from the middleware)
/// * `404 Not Found` - the user vanished between verification and this query
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = get_user_by_id(&pool, user.id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", user.id);
        ApiError::not_found(format!("User with the id {} is not available", user.id))
    })?;

    Ok(Json(UserResponse::from(user)))
}
