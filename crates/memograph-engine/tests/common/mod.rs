#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use memograph_llm::{CompletionClient, EmbeddingClient, TranscriptTurn};
use memograph_persist::{
    GraphStore, Message, MessageDraft, Metadata, Result as StoreResult, Thread, ThreadStatus,
};

/// In-memory GraphStore with a deterministic clock: every insert advances
/// one second from a fixed base, so ordering assertions are stable.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    threads: Vec<Thread>,
    messages: Vec<Message>,
    seq: i64,
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                threads: Vec::new(),
                messages: Vec::new(),
                seq: 0,
            }),
        }
    }

    /// Insert a message with an explicit timestamp, bypassing the clock
    pub fn insert_message_at(&self, draft: MessageDraft, created_at: DateTime<Utc>) -> Message {
        let message = Message {
            id: Uuid::new_v4(),
            thread_id: draft.thread_id,
            role: draft.role,
            content: draft.content,
            created_at,
            embedding: draft.embedding,
            metadata: draft.metadata,
        };
        self.inner.lock().unwrap().messages.push(message.clone());
        message
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn create_thread(&self, metadata: Metadata) -> StoreResult<Thread> {
        let now = base_time();
        let thread = Thread {
            id: Uuid::new_v4(),
            status: ThreadStatus::Active,
            created_at: now,
            updated_at: now,
            metadata,
        };
        self.inner.lock().unwrap().threads.push(thread.clone());
        Ok(thread)
    }

    async fn get_thread(&self, thread_id: Uuid) -> StoreResult<Option<Thread>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.threads.iter().find(|t| t.id == thread_id).cloned())
    }

    async fn set_thread_status(
        &self,
        thread_id: Uuid,
        status: ThreadStatus,
    ) -> StoreResult<Option<Thread>> {
        let mut inner = self.inner.lock().unwrap();
        let seq = inner.seq;
        inner.seq += 1;
        if let Some(thread) = inner.threads.iter_mut().find(|t| t.id == thread_id) {
            thread.status = status;
            thread.updated_at = base_time() + Duration::seconds(seq);
            return Ok(Some(thread.clone()));
        }
        Ok(None)
    }

    async fn insert_message(&self, draft: MessageDraft) -> StoreResult<Message> {
        let mut inner = self.inner.lock().unwrap();
        let created_at = base_time() + Duration::seconds(inner.seq);
        inner.seq += 1;
        let message = Message {
            id: Uuid::new_v4(),
            thread_id: draft.thread_id,
            role: draft.role,
            content: draft.content,
            created_at,
            embedding: draft.embedding,
            metadata: draft.metadata,
        };
        inner.messages.push(message.clone());
        Ok(message)
    }

    async fn get_message(&self, message_id: Uuid) -> StoreResult<Option<Message>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.messages.iter().find(|m| m.id == message_id).cloned())
    }

    async fn thread_messages(&self, thread_id: Uuid) -> StoreResult<Vec<Message>> {
        let inner = self.inner.lock().unwrap();
        let mut messages: Vec<Message> = inner
            .messages
            .iter()
            .filter(|m| m.thread_id == thread_id)
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal timestamps
        messages.sort_by_key(|m| m.created_at);
        Ok(messages)
    }

    async fn recent_messages(&self, thread_id: Uuid, limit: i64) -> StoreResult<Vec<Message>> {
        let mut messages = self.thread_messages(thread_id).await?;
        messages.reverse();
        messages.truncate(limit as usize);
        Ok(messages)
    }

    async fn all_messages(&self) -> StoreResult<Vec<Message>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.messages.clone())
    }
}

/// Stub provider with canned embeddings, topics and summary text.
/// Topic-extraction inputs are recorded for per-bucket assertions.
pub struct StubModel {
    embeddings: HashMap<String, Vec<f32>>,
    default_embedding: Vec<f32>,
    topics: Vec<String>,
    summary: String,
    pub topic_calls: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn new() -> Self {
        Self {
            embeddings: HashMap::new(),
            default_embedding: vec![1.0, 0.0, 0.0],
            topics: vec!["general".to_string()],
            summary: "a short summary".to_string(),
            topic_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_embedding(mut self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        self.embeddings.insert(text.into(), embedding);
        self
    }

    pub fn with_default_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.default_embedding = embedding;
        self
    }

    pub fn with_topics(mut self, topics: Vec<&str>) -> Self {
        self.topics = topics.into_iter().map(str::to_string).collect();
        self
    }

    pub fn recorded_topic_calls(&self) -> Vec<String> {
        self.topic_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmbeddingClient for StubModel {
    async fn embed(&self, text: &str) -> AnyResult<Vec<f32>> {
        Ok(self
            .embeddings
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.default_embedding.clone()))
    }
}

#[async_trait]
impl CompletionClient for StubModel {
    async fn extract_topics(&self, text: &str) -> AnyResult<Vec<String>> {
        self.topic_calls.lock().unwrap().push(text.to_string());
        Ok(self.topics.clone())
    }

    async fn summarize_thread(&self, _transcript: &[TranscriptTurn]) -> AnyResult<String> {
        Ok(self.summary.clone())
    }
}

pub fn draft(thread_id: Uuid, role: memograph_persist::MessageRole, content: &str) -> MessageDraft {
    MessageDraft {
        thread_id,
        role,
        content: content.to_string(),
        embedding: vec![1.0, 0.0, 0.0],
        metadata: Metadata::new(),
    }
}
