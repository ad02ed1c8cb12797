//! Inkpost server entry point.
//!
//! Loads configuration, opens the database, and serves the API. A missing or
//! invalid signing configuration aborts startup — the server never runs with
//! an undefined signing identity.

use inkpost::server::{build_state, create_app, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,inkpost=debug".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Fatal on missing/invalid secret or algorithm
    let config = Config::from_env()?;
    let state = build_state(&config).await?;
    let app = create_app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
