pub mod openai;
pub mod prompts;
pub mod traits;

pub use openai::OpenAIClient;
pub use traits::{CompletionClient, EmbeddingClient, ModelClient, TranscriptTurn};
