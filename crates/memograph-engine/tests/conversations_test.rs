mod common;

use std::sync::Arc;

use uuid::Uuid;

use common::{MemoryStore, StubModel};
use memograph_engine::{Conversations, EngineError};
use memograph_persist::{GraphStore, MessageRole, Metadata, ThreadStatus};

fn conversations(store: &Arc<MemoryStore>, model: StubModel) -> Conversations {
    let store_dyn: Arc<dyn GraphStore> = Arc::clone(store) as Arc<dyn GraphStore>;
    Conversations::new(store_dyn, Arc::new(model))
}

#[tokio::test]
async fn create_then_fetch_message_round_trips() {
    let store = Arc::new(MemoryStore::new());
    let model = StubModel::new().with_default_embedding(vec![0.1, 0.2, 0.3, 0.4]);
    let conversations = conversations(&store, model);

    let thread = conversations.create_thread(Metadata::new()).await.unwrap();
    let created = conversations
        .create_message(thread.id, MessageRole::User, "hello".to_string(), Metadata::new())
        .await
        .unwrap();

    let fetched = conversations.get_message(created.id).await.unwrap();

    assert_eq!(fetched.content, "hello");
    assert_eq!(fetched.role, MessageRole::User);
    assert_eq!(fetched.thread_id, thread.id);
    // Embedding is present with the provider's fixed dimensionality
    assert_eq!(fetched.embedding.len(), 4);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn creating_a_message_in_a_missing_thread_is_a_validation_error() {
    let store = Arc::new(MemoryStore::new());
    let conversations = conversations(&store, StubModel::new());

    let err = conversations
        .create_message(
            Uuid::new_v4(),
            MessageRole::User,
            "orphan".to_string(),
            Metadata::new(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Validation(_)));
}

#[tokio::test]
async fn new_threads_start_active() {
    let store = Arc::new(MemoryStore::new());
    let conversations = conversations(&store, StubModel::new());

    let thread = conversations.create_thread(Metadata::new()).await.unwrap();
    assert_eq!(thread.status, ThreadStatus::Active);
    assert_eq!(thread.created_at, thread.updated_at);
}

#[tokio::test]
async fn status_update_refreshes_updated_at() {
    let store = Arc::new(MemoryStore::new());
    let conversations = conversations(&store, StubModel::new());

    let thread = conversations.create_thread(Metadata::new()).await.unwrap();
    let archived = conversations
        .set_thread_status(thread.id, ThreadStatus::Archived)
        .await
        .unwrap();

    assert_eq!(archived.status, ThreadStatus::Archived);
    assert!(archived.updated_at >= thread.updated_at);
    assert_eq!(archived.created_at, thread.created_at);
}

#[tokio::test]
async fn status_update_on_missing_thread_is_not_found() {
    let store = Arc::new(MemoryStore::new());
    let conversations = conversations(&store, StubModel::new());

    let err = conversations
        .set_thread_status(Uuid::new_v4(), ThreadStatus::Archived)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::ThreadNotFound(_)));
}

#[tokio::test]
async fn missing_lookups_are_not_found() {
    let store = Arc::new(MemoryStore::new());
    let conversations = conversations(&store, StubModel::new());

    let err = conversations.get_thread(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, EngineError::ThreadNotFound(_)));

    let err = conversations.get_message(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, EngineError::MessageNotFound(_)));
}
