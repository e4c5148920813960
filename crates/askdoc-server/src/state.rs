//! Shared application state.

use std::sync::Arc;

use parking_lot::RwLock;

use askdoc_chat::ChatBackend;
use askdoc_core::AskdocConfig;
use askdoc_embed::EmbedderBackend;
use askdoc_index::VectorIndex;
use askdoc_ingest::Ingester;

/// Shared application state accessible from all route handlers.
///
/// The vector index is `None` until the first upload that produces chunks
/// succeeds, and append-only afterwards. Embedding always happens outside
/// the lock; the create-or-append step runs under a single write guard, so
/// queries never observe a partially-written batch.
pub struct AppState {
    pub config: AskdocConfig,
    pub embedder: Arc<dyn EmbedderBackend>,
    pub chat: Arc<dyn ChatBackend>,
    pub ingester: Ingester,
    pub index: RwLock<Option<VectorIndex>>,
}

impl AppState {
    pub fn new(
        config: AskdocConfig,
        embedder: Arc<dyn EmbedderBackend>,
        chat: Arc<dyn ChatBackend>,
    ) -> Self {
        let ingester = Ingester::new(config.chunk_size, config.chunk_overlap);
        Self {
            config,
            embedder,
            chat,
            ingester,
            index: RwLock::new(None),
        }
    }
}
