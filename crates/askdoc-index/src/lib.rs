//! Askdoc Index — in-memory vector index over document chunks.
//!
//! Rows are L2-normalized on insert, so cosine similarity reduces to a
//! matrix-vector dot product at query time. Membership is append-only:
//! chunks are never removed, updated, or re-embedded, and nothing is
//! persisted across process restarts.

use ndarray::{Array1, Array2, Axis};
use tracing::debug;

use askdoc_core::{Error, Result};

/// A retrieval hit: chunk text plus its cosine similarity to the query.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub text: String,
    pub score: f32,
}

/// Append-only vector index mapping chunk embeddings to chunk texts.
pub struct VectorIndex {
    /// Row-normalized embedding matrix, one row per chunk: (N, dim).
    matrix: Array2<f32>,
    /// Chunk texts, parallel to the matrix rows.
    chunks: Vec<String>,
    dim: usize,
}

impl VectorIndex {
    /// Create the index from its first batch. The batch must be non-empty
    /// and every embedding must have the same dimension.
    pub fn from_batch(chunks: Vec<String>, embeddings: Vec<Vec<f32>>) -> Result<Self> {
        if chunks.is_empty() {
            return Err(Error::Index("cannot create index from an empty batch".into()));
        }
        let dim = embeddings
            .first()
            .map(|e| e.len())
            .filter(|&d| d > 0)
            .ok_or_else(|| Error::Index("empty embedding vector".into()))?;

        let mut index = Self {
            matrix: Array2::zeros((0, dim)),
            chunks: Vec::new(),
            dim,
        };
        index.append(chunks, embeddings)?;
        Ok(index)
    }

    /// Append a batch of chunks and their embeddings.
    pub fn append(&mut self, chunks: Vec<String>, embeddings: Vec<Vec<f32>>) -> Result<()> {
        if chunks.len() != embeddings.len() {
            return Err(Error::Index(format!(
                "{} chunks but {} embeddings",
                chunks.len(),
                embeddings.len()
            )));
        }

        let mut batch = Array2::zeros((embeddings.len(), self.dim));
        for (i, embedding) in embeddings.iter().enumerate() {
            if embedding.len() != self.dim {
                return Err(Error::Index(format!(
                    "embedding dimension {} does not match index dimension {}",
                    embedding.len(),
                    self.dim
                )));
            }
            let mut row = batch.row_mut(i);
            row.assign(&Array1::from_vec(embedding.clone()));
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|v| v / norm);
            }
        }

        self.matrix
            .append(Axis(0), batch.view())
            .map_err(|e| Error::Index(format!("matrix append failed: {}", e)))?;
        self.chunks.extend(chunks);

        debug!(total = self.chunks.len(), "index appended");
        Ok(())
    }

    /// Return up to `k` chunks most similar to the query embedding, ordered
    /// by descending cosine similarity.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>> {
        if query.len() != self.dim {
            return Err(Error::Index(format!(
                "query dimension {} does not match index dimension {}",
                query.len(),
                self.dim
            )));
        }

        let mut q = Array1::from_vec(query.to_vec());
        let norm = q.dot(&q).sqrt();
        if norm > 0.0 {
            q.mapv_inplace(|v| v / norm);
        }

        let scores = self.matrix.dot(&q);
        let mut ranked: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(ranked
            .into_iter()
            .take(k)
            .map(|(i, score)| SearchHit {
                text: self.chunks[i].clone(),
                score,
            })
            .collect())
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> VectorIndex {
        VectorIndex::from_batch(
            vec!["x axis".into(), "y axis".into(), "diagonal".into()],
            vec![
                vec![1.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 1.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_search_orders_by_similarity() {
        let index = sample_index();
        let hits = index.search(&[1.0, 0.1], 3).unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].text, "x axis");
        assert!(hits[0].score > hits[1].score);
        assert!(hits[1].score >= hits[2].score);
    }

    #[test]
    fn test_search_truncates_to_k() {
        let index = sample_index();
        let hits = index.search(&[1.0, 0.0], 2).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_append_grows_index() {
        let mut index = sample_index();
        index
            .append(vec!["negative x".into()], vec![vec![-1.0, 0.0]])
            .unwrap();
        assert_eq!(index.len(), 4);

        let hits = index.search(&[-1.0, 0.0], 1).unwrap();
        assert_eq!(hits[0].text, "negative x");
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let mut index = sample_index();
        assert!(index
            .append(vec!["bad".into()], vec![vec![1.0, 2.0, 3.0]])
            .is_err());
        assert!(index.search(&[1.0, 0.0, 0.0], 1).is_err());
        // Failed append leaves the index unchanged
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_empty_batch_rejected() {
        assert!(VectorIndex::from_batch(Vec::new(), Vec::new()).is_err());
    }

    #[test]
    fn test_zero_vector_is_safe() {
        let index = VectorIndex::from_batch(
            vec!["zero".into(), "unit".into()],
            vec![vec![0.0, 0.0], vec![1.0, 0.0]],
        )
        .unwrap();
        let hits = index.search(&[0.0, 0.0], 2).unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.score == 0.0));
    }
}
