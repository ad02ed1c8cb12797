//! Public API Route Handlers
//!
//! Routes that require no authentication:
//!
//! - `POST /login` - Exchange credentials for a bearer token
//! - `POST /user` - User registration
//! - `GET /user/{id}` - User public fields

use axum::{routing, Router};

use crate::auth::handlers::login;
use crate::server::state::AppState;
use crate::users::handlers::{create_user, get_user};

/// Configure the public API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/login", routing::post(login))
        .route("/user", routing::post(create_user))
        .route("/user/{id}", routing::get(get_user))
}
