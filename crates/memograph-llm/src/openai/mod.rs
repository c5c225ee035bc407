mod client;
mod types;

pub use client::OpenAIClient;
pub use types::{ChatChoice, ChatCompletionResponse, ChatMessage, EmbeddingData, EmbeddingResponse};
