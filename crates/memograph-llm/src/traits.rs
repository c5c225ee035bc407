use anyhow::Result;
use async_trait::async_trait;

/// One turn of a conversation transcript handed to the summarizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptTurn {
    pub role: String,
    pub content: String,
}

impl TranscriptTurn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Trait for turning text into fixed-dimension embedding vectors
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Generate an embedding vector for the given text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Trait for completion-backed capabilities (topic extraction, summarization)
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Extract the main topics from a block of text
    async fn extract_topics(&self, text: &str) -> Result<Vec<String>>;

    /// Summarize a conversation transcript into a short paragraph
    async fn summarize_thread(&self, transcript: &[TranscriptTurn]) -> Result<String>;
}

/// Convenience trait for providers that support both capabilities
pub trait ModelClient: EmbeddingClient + CompletionClient {}

impl<T: EmbeddingClient + CompletionClient> ModelClient for T {}
