use std::sync::Arc;

use uuid::Uuid;

use memograph_llm::ModelClient;
use memograph_persist::{GraphStore, Message, MessageDraft, MessageRole, Metadata, Thread, ThreadStatus};

use crate::error::{EngineError, Result};

/// CRUD operations over threads and messages.
///
/// Message creation embeds the content before the insert, so a persisted
/// message always carries its embedding; the insert itself is a single
/// atomic store write.
#[derive(Clone)]
pub struct Conversations {
    store: Arc<dyn GraphStore>,
    model: Arc<dyn ModelClient>,
}

impl Conversations {
    pub fn new(store: Arc<dyn GraphStore>, model: Arc<dyn ModelClient>) -> Self {
        Self { store, model }
    }

    pub async fn create_thread(&self, metadata: Metadata) -> Result<Thread> {
        let thread = self.store.create_thread(metadata).await?;
        tracing::info!(thread_id = %thread.id, "created thread");
        Ok(thread)
    }

    pub async fn get_thread(&self, thread_id: Uuid) -> Result<Thread> {
        self.store
            .get_thread(thread_id)
            .await?
            .ok_or(EngineError::ThreadNotFound(thread_id))
    }

    pub async fn set_thread_status(&self, thread_id: Uuid, status: ThreadStatus) -> Result<Thread> {
        self.store
            .set_thread_status(thread_id, status)
            .await?
            .ok_or(EngineError::ThreadNotFound(thread_id))
    }

    /// Create a message in an existing thread.
    ///
    /// The owning thread is checked first; creating a message against a
    /// missing thread is a validation failure, not a lookup miss.
    pub async fn create_message(
        &self,
        thread_id: Uuid,
        role: MessageRole,
        content: String,
        metadata: Metadata,
    ) -> Result<Message> {
        self.store
            .get_thread(thread_id)
            .await?
            .ok_or_else(|| EngineError::Validation(format!("Thread {} does not exist", thread_id)))?;

        let embedding = self
            .model
            .embed(&content)
            .await
            .map_err(EngineError::Provider)?;

        let message = self
            .store
            .insert_message(MessageDraft {
                thread_id,
                role,
                content,
                embedding,
                metadata,
            })
            .await?;

        tracing::debug!(message_id = %message.id, thread_id = %thread_id, "created message");
        Ok(message)
    }

    pub async fn get_message(&self, message_id: Uuid) -> Result<Message> {
        self.store
            .get_message(message_id)
            .await?
            .ok_or(EngineError::MessageNotFound(message_id))
    }
}
