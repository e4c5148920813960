//! Askdoc Ingest — uploaded file → extracted text → chunk sequence.
//!
//! The upload path spools bytes to a named temporary file for the duration
//! of extraction; the file is removed on every exit path.

pub mod chunking;
pub mod file;
pub mod ingest;

pub use chunking::TextSplitter;
pub use file::FileType;
pub use ingest::Ingester;
