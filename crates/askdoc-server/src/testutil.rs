//! Test doubles for the remote embedding and chat backends.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use askdoc_chat::ChatBackend;
use askdoc_core::{AskdocConfig, Result};
use askdoc_embed::EmbedderBackend;

use crate::state::AppState;

/// Deterministic local embedder: an 8-bin byte histogram.
#[derive(Default)]
pub struct StubEmbedder {
    calls: AtomicUsize,
}

impl StubEmbedder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn histogram_embedding(text: &str) -> Vec<f32> {
    let mut v = vec![0.0f32; 8];
    for b in text.bytes() {
        v[b as usize % 8] += 1.0;
    }
    v
}

#[async_trait]
impl EmbedderBackend for StubEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(histogram_embedding(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts.iter().map(|t| histogram_embedding(t)).collect())
    }
}

/// Canned chat backend that records the prompts it receives.
#[derive(Default)]
pub struct StubChat {
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubChat {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().clone()
    }
}

#[async_trait]
impl ChatBackend for StubChat {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock() = Some(prompt.to_string());
        Ok("stub answer".into())
    }
}

/// Application state backed by the stubs, with default configuration.
pub fn test_state() -> (Arc<AppState>, Arc<StubEmbedder>, Arc<StubChat>) {
    let embedder = Arc::new(StubEmbedder::default());
    let chat = Arc::new(StubChat::default());
    let state = Arc::new(AppState::new(
        AskdocConfig::default(),
        embedder.clone(),
        chat.clone(),
    ));
    (state, embedder, chat)
}

/// Build a single-file multipart body; returns (content-type, body).
pub fn multipart_file(filename: &str, content: &str) -> (String, String) {
    let boundary = "askdoc-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {content}\r\n\
         --{boundary}--\r\n"
    );
    (
        format!("multipart/form-data; boundary={boundary}"),
        body,
    )
}
