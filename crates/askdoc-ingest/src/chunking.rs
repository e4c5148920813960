//! Fixed-window text chunking.
//!
//! Documents are split into windows of `chunk_size` characters advancing by
//! `chunk_size - chunk_overlap`, so consecutive chunks share `chunk_overlap`
//! characters. Windows are counted in characters, not bytes, so a chunk
//! never splits a UTF-8 code point.

/// Splits text into fixed-length overlapping chunks.
pub struct TextSplitter {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl TextSplitter {
    /// `chunk_overlap` must be smaller than `chunk_size` (enforced at
    /// configuration time).
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Split text into chunks. Empty or whitespace-only input yields no
    /// chunks.
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        // Byte offset of each character boundary, for O(1) window slicing.
        let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let n_chars = boundaries.len();
        let step = self.chunk_size - self.chunk_overlap;

        let mut chunks = Vec::new();
        let mut start = 0usize;
        loop {
            let end = (start + self.chunk_size).min(n_chars);
            let byte_start = boundaries[start];
            let byte_end = if end == n_chars {
                text.len()
            } else {
                boundaries[end]
            };
            chunks.push(text[byte_start..byte_end].to_string());

            if end == n_chars {
                break;
            }
            start += step;
        }

        chunks
    }
}
