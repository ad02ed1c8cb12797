//! Database test fixtures.
//!
//! Tests run against an in-memory SQLite database with the real embedded
//! migrations applied.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Create a migrated in-memory test pool.
///
/// The pool is capped at a single connection: every new connection to
/// `sqlite::memory:` would otherwise open a fresh, empty database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
