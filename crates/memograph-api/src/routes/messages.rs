use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use memograph_persist::{Message, MessageRole, Metadata};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub content: String,
    pub role: MessageRole,
    pub thread_id: Uuid,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub embedding: Vec<f32>,
    pub metadata: Metadata,
}

#[derive(Debug, Deserialize)]
pub struct SimilarMessagesQuery {
    pub content: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

/// Create a new message in a thread
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMessageRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let message = state
        .conversations
        .create_message(req.thread_id, req.role, req.content, req.metadata)
        .await?;

    Ok(Json(message_to_response(message)))
}

/// Get a specific message by ID
pub async fn get_message(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let message = state.conversations.get_message(message_id).await?;
    Ok(Json(message_to_response(message)))
}

/// Find messages similar to the provided content
pub async fn find_similar_messages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SimilarMessagesQuery>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let messages = state
        .similarity
        .find_similar_messages(&query.content, query.limit)
        .await?;

    Ok(Json(messages.into_iter().map(message_to_response).collect()))
}

pub fn message_to_response(message: Message) -> MessageResponse {
    MessageResponse {
        id: message.id,
        thread_id: message.thread_id,
        role: message.role,
        content: message.content,
        created_at: message.created_at,
        embedding: message.embedding,
        metadata: message.metadata,
    }
}
