//! Application State Management
//!
//! [`AppState`] is the central state container shared across all request
//! handlers. Everything in it is established once at startup and immutable
//! afterwards: the connection pool manages its own synchronization and the
//! token service holds fixed keys, so handlers need no locking.
//!
//! The `FromRef` implementations let handlers extract just the part of the
//! state they use (`State<SqlitePool>`, `State<TokenService>`) instead of the
//! whole `AppState`.

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::TokenService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Token issuance/verification service (one signing identity per process)
    pub tokens: TokenService,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
