//! File type detection and text extraction.

use std::path::Path;

use askdoc_core::{Error, Result};

/// Supported upload types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    Pdf,
}

impl FileType {
    /// Detect file type from a filename's extension. Anything other than
    /// `.txt` or `.pdf` is rejected before any processing.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "txt" => Ok(Self::PlainText),
            "pdf" => Ok(Self::Pdf),
            _ => Err(Error::UnsupportedFileType(format!(".{}", ext))),
        }
    }

    /// Canonical extension, with the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::PlainText => ".txt",
            Self::Pdf => ".pdf",
        }
    }
}

/// Extract text content from a file on disk.
pub fn extract_text(path: &Path, file_type: FileType) -> Result<String> {
    match file_type {
        FileType::PlainText => {
            let bytes = std::fs::read(path)?;
            String::from_utf8(bytes)
                .map_err(|_| Error::Ingest("file is not valid UTF-8 text".into()))
        }
        FileType::Pdf => pdf_extract::extract_text(path)
            .map_err(|e| Error::Ingest(format!("PDF extraction failed: {}", e))),
    }
}
