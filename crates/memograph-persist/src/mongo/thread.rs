use chrono::Utc;
use mongodb::{bson::doc, Client, Collection};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Metadata, Thread, ThreadStatus};

#[derive(Clone)]
pub struct ThreadRepository {
    collection: Collection<Thread>,
}

impl ThreadRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("threads");
        Self { collection }
    }

    /// Create a new thread
    pub async fn create_thread(&self, metadata: Metadata) -> Result<Thread> {
        let now = Utc::now();
        let thread = Thread {
            id: Uuid::new_v4(),
            status: ThreadStatus::Active,
            created_at: now,
            updated_at: now,
            metadata,
        };

        self.collection.insert_one(&thread).await?;
        Ok(thread)
    }

    /// Get thread by ID
    pub async fn get_thread(&self, thread_id: Uuid) -> Result<Option<Thread>> {
        let filter = doc! { "id": thread_id.to_string() };
        Ok(self.collection.find_one(filter).await?)
    }

    /// Update thread status and refresh updated_at, returning the new state
    pub async fn set_status(
        &self,
        thread_id: Uuid,
        status: ThreadStatus,
    ) -> Result<Option<Thread>> {
        let filter = doc! { "id": thread_id.to_string() };
        let update = doc! {
            "$set": {
                "status": status.as_str(),
                "updated_at": Utc::now().to_rfc3339(),
            }
        };

        let result = self.collection.update_one(filter, update).await?;
        if result.matched_count == 0 {
            return Ok(None);
        }

        self.get_thread(thread_id).await
    }
}
