//! Authentication Middleware
//!
//! Protects routes that require a logged-in user. The middleware:
//!
//! 1. Extracts the JWT from the `Authorization: Bearer <token>` header
//! 2. Verifies signature and expiry via the [`TokenService`]
//! 3. Re-resolves the user from the token's `sub` claim (the email)
//! 4. Attaches an [`AuthenticatedUser`] to the request extensions
//!
//! Any failure answers 401 with the same undifferentiated body.
//!
//! [`TokenService`]: crate::auth::TokenService

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::db::get_user_by_email;

/// Authenticated user data resolved from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the token is missing, invalid, expired, or
/// its subject no longer resolves to a user.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthenticated()
        })?;

    // Expected format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthenticated()
    })?;

    let claims = state.tokens.verify(token)?;

    // The subject must still resolve to a user; a deleted account's token is
    // rejected even before its expiry.
    let user = get_user_by_email(&state.db, &claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject no longer exists");
            ApiError::unauthenticated()
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        id: user.id,
        name: user.name,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Usable as a handler parameter on any route behind [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthenticated()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{TokenConfig, TokenService};
    use axum::http::Request as HttpRequest;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_state() -> AppState {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();

        AppState {
            db: pool,
            tokens: TokenService::new(&TokenConfig::new("middleware-test-secret-0123456789")),
        }
    }

    #[tokio::test]
    async fn test_extractor_returns_user_from_extensions() {
        let state = test_state().await;

        let request = HttpRequest::builder()
            .uri("http://example.com/blog")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let user = AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        parts.extensions.insert(user.clone());

        let extracted = AuthUser::from_request_parts(&mut parts, &state).await;
        assert_eq!(extracted.unwrap().0.id, user.id);
    }

    #[tokio::test]
    async fn test_extractor_rejects_when_extension_missing() {
        let state = test_state().await;

        let request = HttpRequest::builder()
            .uri("http://example.com/blog")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let extracted = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(extracted.is_err());
    }
}
