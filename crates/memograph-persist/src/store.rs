use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Message, MessageDraft, Metadata, Thread, ThreadStatus};

/// Trait for the persistent conversation store
///
/// Implementations provide node create/read operations for threads and
/// messages. Message adjacency is derived from `created_at` sort order at
/// query time; there is no write-time linked structure to maintain, so
/// concurrent inserts into the same thread cannot corrupt ordering reads.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Create a new thread with the given metadata
    async fn create_thread(&self, metadata: Metadata) -> Result<Thread>;

    /// Get a thread by ID
    async fn get_thread(&self, thread_id: Uuid) -> Result<Option<Thread>>;

    /// Update a thread's status, refreshing `updated_at`
    async fn set_thread_status(
        &self,
        thread_id: Uuid,
        status: ThreadStatus,
    ) -> Result<Option<Thread>>;

    /// Insert a message; the store assigns `id` and `created_at`.
    /// The insert is a single atomic write: readers never observe a
    /// partially created message.
    async fn insert_message(&self, draft: MessageDraft) -> Result<Message>;

    /// Get a message by ID
    async fn get_message(&self, message_id: Uuid) -> Result<Option<Message>>;

    /// All messages of a thread, ascending by `created_at`
    async fn thread_messages(&self, thread_id: Uuid) -> Result<Vec<Message>>;

    /// Most recent messages of a thread, descending by `created_at`, capped at `limit`
    async fn recent_messages(&self, thread_id: Uuid, limit: i64) -> Result<Vec<Message>>;

    /// Every message in the store (similarity-search candidate set)
    async fn all_messages(&self) -> Result<Vec<Message>>;
}
