//! Shared test fixtures for the integration suite.
//!
//! Each integration test binary pulls this in with `mod common;`; not every
//! binary uses every helper.
#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;
use sqlx::SqlitePool;

use inkpost::server::{create_app, AppState};

/// Spin up a TestServer over a fresh in-memory database.
///
/// Returns the pool too, for tests that seed data directly.
pub async fn test_server() -> (TestServer, SqlitePool) {
    let pool = database::create_test_pool().await;
    let state = AppState {
        db: pool.clone(),
        tokens: auth_helpers::test_token_service(),
    };
    let server = TestServer::new(create_app(state)).expect("Failed to start test server");
    (server, pool)
}
