//! Error-to-response mapping
//!
//! Every failure leaving the service becomes a structured body with a stable
//! machine-checkable kind. Internal faults are logged server-side and
//! surfaced with a generic message only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use quill_core::Error;

/// Wrapper turning a core error into an HTTP response
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self.0 {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            Error::DuplicateIdentity(msg) => {
                (StatusCode::BAD_REQUEST, "duplicate_identity", msg.clone())
            }
            Error::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                "invalid_credentials",
                self.0.to_string(),
            ),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            other => {
                // Never leak driver or crypto detail to the caller.
                log::error!("internal error: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "kind": kind,
                "message": message,
            }
        }));
        (status, body).into_response()
    }
}
