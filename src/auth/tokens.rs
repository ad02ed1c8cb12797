//! Access token issuance and verification.
//!
//! Tokens are JWTs signed with a symmetric HMAC secret (HS256 by default).
//! The payload carries the subject (the user's email), an issued-at timestamp,
//! and an expiry computed from the configured lifetime. Tokens are
//! self-contained: there is no server-side session store and no revocation
//! list, so a token stays valid until its expiry.
//!
//! # Failure signalling
//!
//! Verification deliberately collapses every failure mode (bad signature,
//! expired, malformed payload, missing subject) into the single
//! [`AuthError::InvalidToken`] variant. Callers map it to one unauthenticated
//! outcome and never learn which check failed. The specific reason is logged
//! at debug level for operators; the token itself is never logged.

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Default signing algorithm (HMAC-SHA-256).
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Default access token lifetime in minutes.
pub const DEFAULT_LIFETIME_MINUTES: u64 = 30;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email address
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Immutable token configuration, established once at startup.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Shared HMAC signing secret
    pub secret: String,
    /// Signing algorithm (HS256/HS384/HS512)
    pub algorithm: Algorithm,
    /// Token lifetime in minutes
    pub lifetime_minutes: u64,
    /// Clock-skew tolerance applied to expiry checks, in seconds.
    /// Zero means strict comparison against the current clock.
    pub leeway_seconds: u64,
}

impl TokenConfig {
    /// Configuration with the given secret and all defaults.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: DEFAULT_ALGORITHM,
            lifetime_minutes: DEFAULT_LIFETIME_MINUTES,
            leeway_seconds: 0,
        }
    }
}

/// Authentication errors surfaced to callers.
#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    /// The token was rejected. Covers bad signature, expiry, malformed
    /// payload, and missing subject; callers are not told which.
    #[error("Could not validate credentials")]
    InvalidToken,

    /// Signing a new token failed.
    #[error("failed to issue access token")]
    TokenCreation,
}

/// Why a token was rejected. Logged for operators, never returned to callers.
#[derive(Debug, Clone, Copy)]
enum RejectReason {
    Expired,
    BadSignature,
    MissingClaim,
    Malformed,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Expired => "expired",
            Self::BadSignature => "bad signature",
            Self::MissingClaim => "missing required claim",
            Self::Malformed => "malformed token",
        };
        f.write_str(s)
    }
}

impl From<&ErrorKind> for RejectReason {
    fn from(kind: &ErrorKind) -> Self {
        match kind {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::MissingRequiredClaim(_) => Self::MissingClaim,
            _ => Self::Malformed,
        }
    }
}

/// Issues and verifies access tokens.
///
/// Holds one signing identity (secret + algorithm) for the process lifetime.
/// The keys are derived once at construction; the service is cheap to clone
/// and safe to share across request handlers without locking.
#[derive(Clone)]
pub struct TokenService {
    header: Header,
    validation: Validation,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime_seconds: u64,
}

impl TokenService {
    /// Build a token service from configuration.
    ///
    /// Configuration is validated at startup ([`crate::server::config`]); by
    /// the time it reaches this constructor the secret is non-empty and the
    /// algorithm is an HMAC variant.
    pub fn new(config: &TokenConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.leeway = config.leeway_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            header: Header::new(config.algorithm),
            validation,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            lifetime_seconds: config.lifetime_minutes * 60,
        }
    }

    /// Issue a signed access token for `subject`.
    ///
    /// The claim set is built fresh per call: `sub` = subject,
    /// `iat` = now, `exp` = now + configured lifetime.
    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        let now = unix_now()?;

        let claims = Claims {
            sub: subject.to_owned(),
            exp: now + self.lifetime_seconds,
            iat: now,
        };

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("failed to sign access token: {e}");
            AuthError::TokenCreation
        })
    }

    /// Verify a bearer token and recover its claims.
    ///
    /// Checks the signature, decodes the payload, and validates expiry
    /// against the clock (read once per call, leeway per configuration).
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidToken`] for every failure mode. The reason is
    /// logged at debug level only.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                let reason = RejectReason::from(err.kind());
                tracing::debug!(%reason, "bearer token rejected");
                AuthError::InvalidToken
            })
    }
}

fn unix_now() -> Result<u64, AuthError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| AuthError::TokenCreation)
}
