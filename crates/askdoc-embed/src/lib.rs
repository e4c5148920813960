//! Askdoc Embed — text → embedding vectors via a remote API.
//!
//! The `EmbedderBackend` trait abstracts over embedding generation so the
//! server (and its tests) can swap the remote client for a stub.

pub mod dashscope;
pub mod embedder;

pub use dashscope::DashScopeEmbedder;
pub use embedder::EmbedderBackend;
