//! API error types.
//!
//! [`ApiError`] is the single error type handlers return. Each variant maps to
//! one HTTP status; the conversion to a response lives in
//! [`crate::error::conversion`].
//!
//! Two rules shape this type:
//!
//! - Authentication failures are undifferentiated: unknown email, wrong
//!   password, expired token, and tampered token all surface as the same
//!   `Unauthorized` response, so a caller cannot probe which check failed.
//! - Internal details (database errors, corrupt password hashes) are logged
//!   server-side and never serialized into a response body.

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::{AuthError, PasswordError};

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested resource does not exist.
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failed. One message for every cause.
    #[error("{message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// The request conflicts with existing state (e.g. duplicate email).
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// The request payload failed validation.
    #[error("{message}")]
    BadRequest {
        /// Human-readable error message
        message: String,
    },

    /// A database operation failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Anything else that should not leak detail to the client.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// The undifferentiated login failure ("Invalid Credentials")
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized {
            message: "Invalid Credentials".to_string(),
        }
    }

    /// The undifferentiated bearer-token failure
    pub fn unauthenticated() -> Self {
        Self::Unauthorized {
            message: "Could not validate credentials".to_string(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// The HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message safe to serialize into the response body.
    ///
    /// Database and internal errors collapse to a generic message; their
    /// detail is logged, not returned.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) => "database error".to_string(),
            Self::Internal => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken => Self::unauthenticated(),
            AuthError::TokenCreation => Self::Internal,
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        // A malformed stored hash is corrupt data, not a failed login; it is
        // logged at the call site and answered as a server error.
        match err {
            PasswordError::MalformedHash | PasswordError::Hashing(_) => Self::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::invalid_credentials().status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::conflict("taken").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::bad_request("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_detail_not_exposed() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.message(), "database error");
    }

    #[test]
    fn test_auth_error_maps_to_unauthorized() {
        let err: ApiError = AuthError::InvalidToken.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "Could not validate credentials");
    }

    #[test]
    fn test_malformed_hash_maps_to_internal() {
        let err: ApiError = PasswordError::MalformedHash.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        // Never tell the client the stored hash is corrupt
        assert_eq!(err.message(), "internal server error");
    }
}
