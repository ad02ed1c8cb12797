//! Inkpost - a blog backend with token authentication.
//!
//! CRUD endpoints for blog posts and users, with Argon2id password hashing
//! and JWT bearer authentication on top of a SQLite store.
//!
//! # Architecture
//!
//! - **`auth`** - Password hashing, token service, login/me handlers
//! - **`users`** - User model, repository, and handlers
//! - **`blogs`** - Blog model, repository, and handlers
//! - **`middleware`** - Bearer token middleware and `AuthUser` extractor
//! - **`routes`** - Router assembly
//! - **`server`** - Configuration, state, and startup
//! - **`error`** - The HTTP-layer error type

/// Authentication: password hashing, tokens, login handlers
pub mod auth;

/// Blog posts: model, repository, handlers
pub mod blogs;

/// API error types
pub mod error;

/// Request middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server configuration, state, and initialization
pub mod server;

/// Users: model, repository, handlers
pub mod users;
