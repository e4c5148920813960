//! Uniform response envelope and error → status-code mapping.
//!
//! Every response carries a `status` field; clients that only inspect the
//! body keep working, while the transport status distinguishes validation,
//! precondition, and downstream failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use askdoc_core::{Error, ErrorKind};

/// Error wrapper giving core errors an HTTP rendering.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Precondition => StatusCode::CONFLICT,
            ErrorKind::Downstream => StatusCode::BAD_GATEWAY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        match self.0.kind() {
            ErrorKind::Downstream | ErrorKind::Internal => error!("{}", message),
            _ => warn!("{}", message),
        }

        (
            status,
            Json(json!({ "status": "error", "message": message })),
        )
            .into_response()
    }
}
