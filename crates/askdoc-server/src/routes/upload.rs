//! Upload route — drives ingestion and index writing.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use askdoc_core::Error;
use askdoc_index::VectorIndex;

use crate::envelope::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/upload", post(upload_document))
}

/// POST /api/upload — multipart form with a `file` field.
async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| Error::Validation(format!("failed to read file field: {}", e)))?;
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = upload.ok_or_else(|| Error::Validation("No file provided".into()))?;
    if filename.trim().is_empty() {
        return Err(Error::Validation("Filename must not be empty".into()).into());
    }

    let chunks_count = index_document(&state, &filename, bytes.to_vec()).await?;
    info!(filename = %filename, chunks_count, "document indexed");

    Ok(Json(json!({
        "status": "success",
        "message": "Document uploaded successfully",
        "chunks_count": chunks_count,
    })))
}

/// Ingest the upload, embed its chunks, and write them into the index.
///
/// Extraction may block on PDF parsing, so it runs on the blocking pool.
/// Embedding happens before the index lock is taken; create-or-append then
/// runs under a single write guard.
pub(crate) async fn index_document(
    state: &Arc<AppState>,
    filename: &str,
    bytes: Vec<u8>,
) -> askdoc_core::Result<usize> {
    let chunks = {
        let state = state.clone();
        let filename = filename.to_string();
        tokio::task::spawn_blocking(move || state.ingester.ingest_upload(&filename, &bytes))
            .await
            .map_err(|e| Error::Internal(format!("ingest task failed: {}", e)))??
    };

    if chunks.is_empty() {
        return Ok(0);
    }
    let chunks_count = chunks.len();

    let embeddings = state.embedder.embed_batch(&chunks).await?;

    let mut index = state.index.write();
    match index.as_mut() {
        Some(existing) => existing.append(chunks, embeddings)?,
        None => *index = Some(VectorIndex::from_batch(chunks, embeddings)?),
    }

    Ok(chunks_count)
}
