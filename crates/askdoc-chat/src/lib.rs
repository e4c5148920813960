//! Askdoc Chat — prompt assembly and the chat-completion backend.

pub mod client;
pub mod prompt;

pub use client::{ChatBackend, DashScopeChat};
pub use prompt::build_qa_prompt;
