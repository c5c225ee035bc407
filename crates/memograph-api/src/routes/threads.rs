use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use memograph_engine::ThreadSummary;
use memograph_persist::{Metadata, Thread, ThreadStatus};

use crate::error::ApiResult;
use crate::routes::messages::{message_to_response, MessageResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateThreadRequest {
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    pub id: Uuid,
    pub status: ThreadStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub metadata: Metadata,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ThreadStatus,
}

#[derive(Debug, Deserialize)]
pub struct ContextQuery {
    pub message_id: Option<Uuid>,
    pub window_size: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SimilarThreadsQuery {
    pub content: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

/// Create a new conversation thread
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateThreadRequest>,
) -> ApiResult<Json<ThreadResponse>> {
    let thread = state.conversations.create_thread(req.metadata).await?;
    Ok(Json(thread_to_response(thread)))
}

/// Get thread details
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<Uuid>,
) -> ApiResult<Json<ThreadResponse>> {
    let thread = state.conversations.get_thread(thread_id).await?;
    Ok(Json(thread_to_response(thread)))
}

/// Update thread status (active/archived)
pub async fn update_thread_status(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<Json<ThreadResponse>> {
    let thread = state
        .conversations
        .set_thread_status(thread_id, req.status)
        .await?;
    Ok(Json(thread_to_response(thread)))
}

/// Generate a summary of the thread including topics and analytics
pub async fn get_thread_summary(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<Uuid>,
) -> ApiResult<Json<ThreadSummary>> {
    let summary = state.analytics.thread_summary(thread_id).await?;
    Ok(Json(summary))
}

/// Get context from a thread, optionally around a specific message
pub async fn get_thread_context(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<Uuid>,
    Query(query): Query<ContextQuery>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let messages = state
        .context
        .get_context(thread_id, query.message_id, query.window_size)
        .await?;

    Ok(Json(messages.into_iter().map(message_to_response).collect()))
}

/// Find threads similar to the provided content
pub async fn find_similar_threads(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SimilarThreadsQuery>,
) -> ApiResult<Json<Vec<ThreadSummary>>> {
    let summaries = state
        .similarity
        .find_similar_threads(&query.content, query.limit)
        .await?;
    Ok(Json(summaries))
}

fn thread_to_response(thread: Thread) -> ThreadResponse {
    ThreadResponse {
        id: thread.id,
        status: thread.status,
        created_at: thread.created_at,
        updated_at: thread.updated_at,
        metadata: thread.metadata,
    }
}
