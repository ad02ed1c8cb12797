//! Router Configuration
//!
//! Combines all route groups into a single Axum router.
//!
//! # Route Groups
//!
//! 1. **Protected routes** - blog CRUD and `/me`, behind the bearer
//!    middleware
//! 2. **Public API routes** - login and user registration/lookup
//! 3. **Fallback** - 404 for everything else
//!
//! The auth middleware is applied with `route_layer`, so it runs only for
//! routes that matched — an unknown path answers 404, not 401.

use axum::{http::StatusCode, middleware, routing, Router};
use tower_http::trace::TraceLayer;

use crate::auth::handlers::get_me;
use crate::blogs::handlers as blog_handlers;
use crate::middleware::auth::auth_middleware;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// ## Protected (bearer token required)
///
/// - `GET /blog` - List all blogs
/// - `POST /blog` - Create a blog
/// - `GET /blog/{id}` - Get one blog
/// - `PUT /blog/{id}` - Update a blog
/// - `DELETE /blog/{id}` - Delete a blog
/// - `GET /me` - Current user
///
/// ## Public
///
/// - `POST /login` - Login, returns `{access_token, token_type}`
/// - `POST /user` - Register
/// - `GET /user/{id}` - User lookup
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/blog",
            routing::get(blog_handlers::all).post(blog_handlers::create),
        )
        .route(
            "/blog/{id}",
            routing::get(blog_handlers::show)
                .put(blog_handlers::update)
                .delete(blog_handlers::destroy),
        )
        .route("/me", routing::get(get_me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let router = configure_api_routes(Router::new().merge(protected));

    router
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
