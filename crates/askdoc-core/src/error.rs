//! Error types for askdoc.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Unsupported file type: {0} (only .txt and .pdf are accepted)")]
    UnsupportedFileType(String),

    #[error("Ingest error: {0}")]
    Ingest(String),

    #[error("Vector index is not initialized; upload a document first")]
    IndexNotReady,

    #[error("Index error: {0}")]
    Index(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Broad failure category, used by the HTTP layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad client input — rejected before any work is done.
    Validation,
    /// Client input accepted but its content could not be processed.
    Unprocessable,
    /// Required server state does not exist yet.
    Precondition,
    /// An external collaborator (embedding or completion API) failed.
    Downstream,
    /// Everything else.
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) | Error::UnsupportedFileType(_) => ErrorKind::Validation,
            Error::Ingest(_) => ErrorKind::Unprocessable,
            Error::IndexNotReady => ErrorKind::Precondition,
            Error::Embedding(_) | Error::Completion(_) => ErrorKind::Downstream,
            Error::Index(_) | Error::Config(_) | Error::Io(_) | Error::Json(_)
            | Error::Internal(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::Validation("x".into()).kind(), ErrorKind::Validation);
        assert_eq!(
            Error::UnsupportedFileType(".docx".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(Error::IndexNotReady.kind(), ErrorKind::Precondition);
        assert_eq!(Error::Embedding("quota".into()).kind(), ErrorKind::Downstream);
        assert_eq!(Error::Internal("boom".into()).kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_index_not_ready_message_names_state() {
        let msg = Error::IndexNotReady.to_string();
        assert!(msg.contains("not initialized"));
    }
}
