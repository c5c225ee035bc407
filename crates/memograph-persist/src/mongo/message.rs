use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Message, MessageDraft};

#[derive(Clone)]
pub struct MessageRepository {
    collection: Collection<Message>,
}

impl MessageRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("messages");
        Self { collection }
    }

    /// Insert a message, assigning id and created_at.
    /// Single document write; atomic at the store boundary.
    pub async fn insert_message(&self, draft: MessageDraft) -> Result<Message> {
        let message = Message {
            id: Uuid::new_v4(),
            thread_id: draft.thread_id,
            role: draft.role,
            content: draft.content,
            created_at: Utc::now(),
            embedding: draft.embedding,
            metadata: draft.metadata,
        };

        self.collection.insert_one(&message).await?;
        Ok(message)
    }

    /// Get a message by ID
    pub async fn get_message(&self, message_id: Uuid) -> Result<Option<Message>> {
        let filter = doc! { "id": message_id.to_string() };
        Ok(self.collection.find_one(filter).await?)
    }

    /// All messages for a thread in chronological order
    pub async fn thread_messages(&self, thread_id: Uuid) -> Result<Vec<Message>> {
        let filter = doc! { "thread_id": thread_id.to_string() };
        let messages = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }

    /// Most recent messages for a thread, newest first
    pub async fn recent_messages(&self, thread_id: Uuid, limit: i64) -> Result<Vec<Message>> {
        let filter = doc! { "thread_id": thread_id.to_string() };
        let messages = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }

    /// Every stored message, used as the similarity-search candidate set
    pub async fn all_messages(&self) -> Result<Vec<Message>> {
        let messages = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }
}
