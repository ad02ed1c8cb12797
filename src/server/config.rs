//! Server Configuration
//!
//! Loads all configuration from environment variables, once, at startup.
//! `.env` files are honored by `main` before this runs.
//!
//! # Variables
//!
//! | Variable | Default | Notes |
//! |---|---|---|
//! | `JWT_SECRET` | — | required, non-empty |
//! | `JWT_ALGORITHM` | `HS256` | HS256/HS384/HS512 only |
//! | `ACCESS_TOKEN_EXPIRE_MINUTES` | `30` | token lifetime |
//! | `TOKEN_EXPIRY_LEEWAY_SECONDS` | `0` | clock-skew tolerance |
//! | `DATABASE_URL` | `sqlite://blog.db` | |
//! | `SERVER_PORT` | `8000` | |
//!
//! # Error Handling
//!
//! A missing or invalid secret/algorithm is fatal: the process refuses to
//! start rather than run with an undefined signing identity.

use jsonwebtoken::Algorithm;
use std::str::FromStr;
use thiserror::Error;

use crate::auth::tokens::{TokenConfig, DEFAULT_ALGORITHM, DEFAULT_LIFETIME_MINUTES};

/// Default database URL (SQLite file in the working directory)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Fatal configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// `JWT_SECRET` is unset or empty
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingSecret,

    /// `JWT_ALGORITHM` is not an HMAC variant
    #[error("unsupported signing algorithm: {0} (expected HS256, HS384, or HS512)")]
    UnsupportedAlgorithm(String),

    /// A numeric variable failed to parse
    #[error("invalid value for {name}: {value}")]
    InvalidValue {
        /// Environment variable name
        name: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Process-wide configuration, immutable after startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL
    pub database_url: String,
    /// Port to listen on
    pub port: u16,
    /// Token signing configuration
    pub token: TokenConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] on a missing secret, unsupported algorithm, or
    /// unparseable numeric value. Callers should treat this as fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let algorithm = match std::env::var("JWT_ALGORITHM") {
            Ok(raw) => parse_algorithm(&raw)?,
            Err(_) => DEFAULT_ALGORITHM,
        };

        let lifetime_minutes =
            parse_var("ACCESS_TOKEN_EXPIRE_MINUTES", DEFAULT_LIFETIME_MINUTES)?;
        let leeway_seconds = parse_var("TOKEN_EXPIRY_LEEWAY_SECONDS", 0u64)?;
        let port = parse_var("SERVER_PORT", DEFAULT_PORT)?;

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            database_url,
            port,
            token: TokenConfig {
                secret,
                algorithm,
                lifetime_minutes,
                leeway_seconds,
            },
        })
    }
}

/// Parse the signing algorithm, accepting HMAC variants only.
///
/// The signing key is a shared secret, so asymmetric algorithms are
/// rejected rather than silently fed a non-PEM key.
fn parse_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    match Algorithm::from_str(raw) {
        Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(alg),
        _ => Err(ConfigError::UnsupportedAlgorithm(raw.to_string())),
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        Err(_) => Ok(default),
    }
}
