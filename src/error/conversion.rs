//! Error conversion to HTTP responses.
//!
//! [`ApiError`] implements `IntoResponse`, so handlers return it directly.
//! The body is JSON:
//!
//! ```json
//! {
//!   "error": "Blog with the id ... is not available",
//!   "status": 404
//! }
//! ```
//!
//! 401 responses additionally carry `WWW-Authenticate: Bearer`.

use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Server-side detail gets logged here, once, before it is collapsed
        // into the generic body.
        match &self {
            ApiError::Database(e) => tracing::error!("database error: {e}"),
            ApiError::Internal => tracing::error!("internal error surfaced to client"),
            _ => {}
        }

        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
