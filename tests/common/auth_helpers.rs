//! Authentication test helpers.
//!
//! Utilities for creating test users, generating tokens, and building
//! authorization headers.

use sqlx::SqlitePool;

use inkpost::auth::{hash_password, TokenConfig, TokenService};
use inkpost::users::db::{create_user, User};

/// Signing secret shared by all integration tests
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Token service configured with [`TEST_SECRET`] and default lifetime
pub fn test_token_service() -> TokenService {
    TokenService::new(&TokenConfig::new(TEST_SECRET))
}

/// Test user credentials
pub struct TestUser {
    pub user: User,
    pub password: String,
    pub token: String,
}

/// Create a user in the database and issue a token for it
pub async fn create_test_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let password_hash = hash_password(password).expect("Failed to hash test password");
    let user = create_user(pool, name, email, &password_hash)
        .await
        .expect("Failed to create test user");
    let token = test_token_service()
        .issue(&user.email)
        .expect("Failed to issue test token");

    TestUser {
        user,
        password: password.to_string(),
        token,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {token}")
}
