//! Configuration, read from the environment once at startup.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_API_BASE: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-v1";
pub const DEFAULT_CHAT_MODEL: &str = "qwen-turbo";

/// Top-level askdoc configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskdocConfig {
    /// HTTP server port.
    pub port: u16,
    /// API key for the DashScope-compatible endpoint. May be absent; calls
    /// then fail downstream when the API rejects the request.
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API (embeddings + chat).
    pub api_base: String,
    /// Embedding model identifier.
    pub embedding_model: String,
    /// Chat-completion model identifier.
    pub chat_model: String,
    /// Chunk window length in characters.
    pub chunk_size: usize,
    /// Overlap between consecutive chunks in characters.
    pub chunk_overlap: usize,
    /// Number of chunks retrieved per query.
    pub top_k: usize,
    /// Sampling temperature for chat completions.
    pub temperature: f64,
}

impl Default for AskdocConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            api_key: None,
            api_base: DEFAULT_API_BASE.into(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.into(),
            chat_model: DEFAULT_CHAT_MODEL.into(),
            chunk_size: 1000,
            chunk_overlap: 200,
            top_k: 3,
            temperature: 0.7,
        }
    }
}

impl AskdocConfig {
    /// Create configuration from environment variables and defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            port: env_parse("PORT", defaults.port)?,
            api_key: std::env::var("DASHSCOPE_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            api_base: std::env::var("DASHSCOPE_API_BASE").unwrap_or(defaults.api_base),
            embedding_model: std::env::var("ASKDOC_EMBEDDING_MODEL")
                .unwrap_or(defaults.embedding_model),
            chat_model: std::env::var("ASKDOC_CHAT_MODEL").unwrap_or(defaults.chat_model),
            chunk_size: env_parse("ASKDOC_CHUNK_SIZE", defaults.chunk_size)?,
            chunk_overlap: env_parse("ASKDOC_CHUNK_OVERLAP", defaults.chunk_overlap)?,
            top_k: env_parse("ASKDOC_TOP_K", defaults.top_k)?,
            temperature: env_parse("ASKDOC_TEMPERATURE", defaults.temperature)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::Config("chunk_size must be positive".into()));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(Error::Config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        if self.top_k == 0 {
            return Err(Error::Config("top_k must be positive".into()));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("invalid value for {}: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AskdocConfig::default();
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 200);
        assert_eq!(config.top_k, 3);
        assert_eq!(config.chat_model, "qwen-turbo");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overlap_must_be_smaller_than_size() {
        let config = AskdocConfig {
            chunk_size: 100,
            chunk_overlap: 100,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let config = AskdocConfig {
            top_k: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
