use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use memograph_engine::{ConversationPatterns, ThreadStats, TopicWindow};

use crate::error::ApiResult;
use crate::state::AppState;

/// Get comprehensive statistics for a thread
pub async fn get_thread_statistics(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<Uuid>,
) -> ApiResult<Json<ThreadStats>> {
    let stats = state.analytics.thread_stats(thread_id).await?;
    Ok(Json(stats))
}

/// Analyze conversation patterns and interaction dynamics
pub async fn analyze_conversation_patterns(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<Uuid>,
) -> ApiResult<Json<ConversationPatterns>> {
    let patterns = state.analytics.conversation_patterns(thread_id).await?;
    Ok(Json(patterns))
}

/// Analyze how topics evolve throughout the conversation
pub async fn get_topic_evolution(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<Uuid>,
) -> ApiResult<Json<Vec<TopicWindow>>> {
    let evolution = state.analytics.topic_evolution(thread_id).await?;
    Ok(Json(evolution))
}
