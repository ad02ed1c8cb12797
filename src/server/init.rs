//! Server Initialization
//!
//! Builds the application state (database pool + token service) and the
//! router. Unlike configuration parsing, which happens in
//! [`crate::server::config`], everything here touches the outside world.
//!
//! Initialization is fatal-on-error: this service cannot run without its
//! store, so a connection or migration failure propagates out of `main`
//! instead of starting a half-working server.

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use thiserror::Error;

use crate::auth::TokenService;
use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Errors during state construction
#[derive(Debug, Error)]
pub enum InitError {
    /// Opening the database failed
    #[error("failed to open database: {0}")]
    Database(#[from] sqlx::Error),

    /// Running embedded migrations failed
    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Build the application state: connect the pool, run migrations, and
/// construct the token service from the validated configuration.
pub async fn build_state(config: &Config) -> Result<AppState, InitError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    Ok(AppState {
        db: pool,
        tokens: TokenService::new(&config.token),
    })
}

/// Create the Axum application from prepared state.
pub fn create_app(state: AppState) -> Router {
    create_router(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::db::{create_user, get_user_by_email};

    #[tokio::test]
    async fn test_build_state_creates_database_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let database_url = format!("sqlite://{}/blog.db", dir.path().display());

        let config = Config {
            database_url,
            port: 0,
            token: crate::auth::TokenConfig::new("init-test-secret-0123456789abcdef"),
        };

        let state = build_state(&config).await.unwrap();

        // Schema is usable immediately after startup
        let user = create_user(&state.db, "dev", "dev@example.com", "$argon2id$stub")
            .await
            .unwrap();
        let found = get_user_by_email(&state.db, "dev@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, user.id);
    }
}
