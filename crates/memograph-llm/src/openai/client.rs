// OpenAI-specific client implementation (HTTP direct, no SDK)

use crate::openai::types::{ChatCompletionResponse, EmbeddingResponse};
use crate::prompts::{THREAD_SUMMARY_PROMPT, TOPIC_EXTRACTION_PROMPT};
use crate::traits::{CompletionClient, EmbeddingClient, TranscriptTurn};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI client providing embeddings, topic extraction and summarization
pub struct OpenAIClient {
    http_client: reqwest::Client,
    base_url: String,
    embedding_model: String,
    completion_model: String,
}

impl OpenAIClient {
    /// Create new client with API key and default models
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_models(api_key, DEFAULT_EMBEDDING_MODEL, DEFAULT_COMPLETION_MODEL)
    }

    /// Create new client with explicit model identifiers
    pub fn with_models(
        api_key: impl Into<String>,
        embedding_model: impl Into<String>,
        completion_model: impl Into<String>,
    ) -> Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .context("Invalid API key format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: OPENAI_API_BASE.to_string(),
            embedding_model: embedding_model.into(),
            completion_model: completion_model.into(),
        })
    }

    /// Override the API base URL (used for tests and proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Single-prompt chat completion, returning the assistant message text
    async fn chat_completion(
        &self,
        prompt: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String> {
        let request = serde_json::json!({
            "model": self.completion_model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": temperature,
            "max_tokens": max_tokens,
        });

        let response: ChatCompletionResponse = self
            .post_json("/chat/completions", &request)
            .await
            .context("Chat completion request failed")?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("Chat completion returned no content"))?;

        Ok(content.trim().to_string())
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(anyhow!("OpenAI API error ({}): {}", status, error_body));
        }

        response
            .json::<T>()
            .await
            .context("Failed to decode OpenAI response")
    }
}

#[async_trait]
impl EmbeddingClient for OpenAIClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = serde_json::json!({
            "model": self.embedding_model,
            "input": text,
        });

        let response: EmbeddingResponse = self
            .post_json("/embeddings", &request)
            .await
            .context("Embedding request failed")?;

        let embedding = response
            .data
            .into_iter()
            .next()
            .map(|data| data.embedding)
            .ok_or_else(|| anyhow!("Embedding response contained no data"))?;

        tracing::debug!(model = %self.embedding_model, dims = embedding.len(), "generated embedding");
        Ok(embedding)
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn extract_topics(&self, text: &str) -> Result<Vec<String>> {
        let prompt = TOPIC_EXTRACTION_PROMPT.replace("<text>", text);
        let content = self.chat_completion(prompt, 0.3, 100).await?;
        Ok(parse_topic_list(&content))
    }

    async fn summarize_thread(&self, transcript: &[TranscriptTurn]) -> Result<String> {
        let conversation = render_transcript(transcript);
        let prompt = THREAD_SUMMARY_PROMPT.replace("<conversation>", &conversation);
        self.chat_completion(prompt, 0.5, 150).await
    }
}

/// Split a comma-separated completion into trimmed, non-empty topics
pub(crate) fn parse_topic_list(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn render_transcript(transcript: &[TranscriptTurn]) -> String {
    transcript
        .iter()
        .map(|turn| format!("{}: {}", turn.role, turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}
