//! Diagnostic route — echoes posted JSON back in a success envelope.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use askdoc_core::Error;

use crate::envelope::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/test", post(test_echo))
}

/// POST /api/test — no business logic, just the envelope round-trip.
async fn test_echo(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(data) = payload
        .map_err(|e| Error::Validation(format!("invalid JSON body: {}", e)))?;

    Ok(Json(json!({
        "status": "success",
        "message": "API request successful",
        "data": data,
    })))
}
