//! Query route — retrieval plus chat completion.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use askdoc_chat::build_qa_prompt;
use askdoc_core::Error;

use crate::envelope::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/query", post(query_document))
}

#[derive(Debug, Deserialize)]
struct QueryRequest {
    #[serde(default)]
    question: Option<String>,
}

/// POST /api/query — JSON `{"question": str}`.
async fn query_document(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(request) = payload
        .map_err(|e| Error::Validation(format!("invalid JSON body: {}", e)))?;

    let question = request
        .question
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| Error::Validation("Question must not be empty".into()))?;

    let answer = answer_question(&state, question).await?;

    Ok(Json(json!({
        "status": "success",
        "answer": answer,
    })))
}

/// Embed the question, retrieve the top-k chunks, and ask the model.
///
/// The index-exists precondition is checked before any external call, so a
/// query against an uninitialized index costs nothing downstream.
pub(crate) async fn answer_question(state: &AppState, question: &str) -> askdoc_core::Result<String> {
    if state.index.read().is_none() {
        return Err(Error::IndexNotReady);
    }

    let query_embedding = state.embedder.embed(question).await?;

    let context: Vec<String> = {
        let index = state.index.read();
        let index = index.as_ref().ok_or(Error::IndexNotReady)?;
        index
            .search(&query_embedding, state.config.top_k)?
            .into_iter()
            .map(|hit| hit.text)
            .collect()
    };

    let prompt = build_qa_prompt(&context, question);
    state.chat.complete(&prompt).await
}
