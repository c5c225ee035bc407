use async_trait::async_trait;
use mongodb::Client;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::{Message, MessageDraft, Metadata, Thread, ThreadStatus};
use crate::mongo::{MessageRepository, ThreadRepository};
use crate::store::GraphStore;

/// MongoDB-backed conversation store
pub struct MongoStore {
    thread_repo: ThreadRepository,
    message_repo: MessageRepository,
}

impl MongoStore {
    pub async fn connect(mongodb_uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::info!(database = db_name, "connected to MongoDB");

        Ok(Self {
            thread_repo: ThreadRepository::new(&client, db_name),
            message_repo: MessageRepository::new(&client, db_name),
        })
    }
}

#[async_trait]
impl GraphStore for MongoStore {
    async fn create_thread(&self, metadata: Metadata) -> Result<Thread> {
        self.thread_repo.create_thread(metadata).await
    }

    async fn get_thread(&self, thread_id: Uuid) -> Result<Option<Thread>> {
        self.thread_repo.get_thread(thread_id).await
    }

    async fn set_thread_status(
        &self,
        thread_id: Uuid,
        status: ThreadStatus,
    ) -> Result<Option<Thread>> {
        self.thread_repo.set_status(thread_id, status).await
    }

    async fn insert_message(&self, draft: MessageDraft) -> Result<Message> {
        self.message_repo.insert_message(draft).await
    }

    async fn get_message(&self, message_id: Uuid) -> Result<Option<Message>> {
        self.message_repo.get_message(message_id).await
    }

    async fn thread_messages(&self, thread_id: Uuid) -> Result<Vec<Message>> {
        self.message_repo.thread_messages(thread_id).await
    }

    async fn recent_messages(&self, thread_id: Uuid, limit: i64) -> Result<Vec<Message>> {
        self.message_repo.recent_messages(thread_id, limit).await
    }

    async fn all_messages(&self) -> Result<Vec<Message>> {
        self.message_repo.all_messages().await
    }
}
