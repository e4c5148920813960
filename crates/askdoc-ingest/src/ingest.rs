//! Document ingestion: uploaded bytes → text → chunks.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use askdoc_core::{Error, Result};

use crate::chunking::TextSplitter;
use crate::file::{self, FileType};

/// Drives the upload pipeline: validate the filename, spool the bytes to a
/// temporary file, extract text, split into chunks.
pub struct Ingester {
    splitter: TextSplitter,
    temp_dir: PathBuf,
}

impl Ingester {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            splitter: TextSplitter::new(chunk_size, chunk_overlap),
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Use a specific directory for temporary spool files.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    /// Ingest an uploaded document. Returns the ordered chunk texts; an
    /// empty document yields an empty vector, not an error.
    ///
    /// The spool file is deleted when the `NamedTempFile` guard drops, on
    /// every exit path.
    pub fn ingest_upload(&self, filename: &str, bytes: &[u8]) -> Result<Vec<String>> {
        if filename.trim().is_empty() {
            return Err(Error::Validation("Filename must not be empty".into()));
        }

        let file_type = FileType::from_filename(filename)?;

        let mut spool = tempfile::Builder::new()
            .prefix("askdoc-upload-")
            .suffix(file_type.extension())
            .tempfile_in(&self.temp_dir)?;
        spool.write_all(bytes)?;
        spool.flush()?;

        let text = file::extract_text(spool.path(), file_type)?;
        let chunks = self.splitter.split(&text);

        debug!(
            filename,
            chars = text.len(),
            chunks = chunks.len(),
            "ingested document"
        );

        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir_is_empty(dir: &std::path::Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[test]
    fn test_txt_upload_chunk_count() {
        let dir = tempfile::tempdir().unwrap();
        let ingester = Ingester::new(10, 4).with_temp_dir(dir.path());

        let text: String = ('a'..='t').collect();
        let chunks = ingester.ingest_upload("notes.txt", text.as_bytes()).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], "abcdefghij");
    }

    #[test]
    fn test_empty_document_yields_zero_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let ingester = Ingester::new(1000, 200).with_temp_dir(dir.path());

        let chunks = ingester.ingest_upload("empty.txt", b"  \n ").unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_empty_filename_rejected() {
        let ingester = Ingester::new(1000, 200);
        let err = ingester.ingest_upload("  ", b"content").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_unsupported_extension_rejected_before_spool() {
        let dir = tempfile::tempdir().unwrap();
        let ingester = Ingester::new(1000, 200).with_temp_dir(dir.path());

        let err = ingester.ingest_upload("slides.pptx", b"data").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType(_)));
        assert!(dir_is_empty(dir.path()));
    }

    #[test]
    fn test_spool_file_removed_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let ingester = Ingester::new(1000, 200).with_temp_dir(dir.path());

        ingester.ingest_upload("doc.txt", b"some text").unwrap();
        assert!(dir_is_empty(dir.path()));
    }

    #[test]
    fn test_spool_file_removed_on_extraction_failure() {
        let dir = tempfile::tempdir().unwrap();
        let ingester = Ingester::new(1000, 200).with_temp_dir(dir.path());

        // Not a real PDF; extraction fails but the spool file still goes away.
        let err = ingester.ingest_upload("broken.pdf", b"not a pdf").unwrap_err();
        assert!(matches!(err, Error::Ingest(_)));
        assert!(dir_is_empty(dir.path()));
    }
}
