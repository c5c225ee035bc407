use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use memograph_llm::ModelClient;
use memograph_persist::{GraphStore, Message};

use crate::analytics::{AnalyticsEngine, ThreadSummary};
use crate::config::{EngineConfig, MAX_SIMILAR_MESSAGES, MAX_SIMILAR_THREADS};
use crate::error::{EngineError, Result};

/// Threshold-based nearest-neighbor retrieval over message embeddings
#[derive(Clone)]
pub struct SimilarityEngine {
    store: Arc<dyn GraphStore>,
    model: Arc<dyn ModelClient>,
    analytics: AnalyticsEngine,
    config: EngineConfig,
}

struct ScoredMessage {
    score: f32,
    message: Message,
}

impl SimilarityEngine {
    pub fn new(
        store: Arc<dyn GraphStore>,
        model: Arc<dyn ModelClient>,
        config: EngineConfig,
    ) -> Self {
        let analytics = AnalyticsEngine::new(Arc::clone(&store), Arc::clone(&model));
        Self {
            store,
            model,
            analytics,
            config,
        }
    }

    /// Messages whose embeddings clear the similarity threshold against the
    /// query text, best match first. An empty result is not an error.
    pub async fn find_similar_messages(
        &self,
        content: &str,
        limit: usize,
    ) -> Result<Vec<Message>> {
        let limit = limit.min(MAX_SIMILAR_MESSAGES);
        let mut scored = self.scored_candidates(content).await?;

        scored.truncate(limit);
        Ok(scored.into_iter().map(|s| s.message).collect())
    }

    /// Threads ranked by their best-matching message, each materialized as a
    /// full summary.
    ///
    /// This is an N+1 fan-out: one candidate scan plus one summary (itself
    /// two provider calls) per surviving thread.
    pub async fn find_similar_threads(
        &self,
        content: &str,
        limit: usize,
    ) -> Result<Vec<ThreadSummary>> {
        let limit = limit.min(MAX_SIMILAR_THREADS);
        let scored = self.scored_candidates(content).await?;

        let mut best_per_thread: HashMap<Uuid, f32> = HashMap::new();
        for entry in &scored {
            best_per_thread
                .entry(entry.message.thread_id)
                .and_modify(|best| *best = best.max(entry.score))
                .or_insert(entry.score);
        }

        let mut ranked: Vec<(Uuid, f32)> = best_per_thread.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(limit);

        let mut summaries = Vec::with_capacity(ranked.len());
        for (thread_id, score) in ranked {
            tracing::debug!(thread_id = %thread_id, score, "materializing similar thread summary");
            summaries.push(self.analytics.thread_summary(thread_id).await?);
        }

        Ok(summaries)
    }

    /// Embed the query and score every stored message against it, keeping
    /// matches at or above the threshold, ordered by score descending with
    /// `created_at` ascending as the deterministic tie-break.
    async fn scored_candidates(&self, content: &str) -> Result<Vec<ScoredMessage>> {
        let query = self
            .model
            .embed(content)
            .await
            .map_err(EngineError::Provider)?;

        // A degenerate query embedding matches nothing.
        if l2_norm(&query) == 0.0 {
            return Ok(Vec::new());
        }

        let candidates = self.store.all_messages().await?;
        let mut scored = Vec::new();

        for message in candidates {
            if message.embedding.is_empty() || l2_norm(&message.embedding) == 0.0 {
                continue;
            }
            if message.embedding.len() != query.len() {
                return Err(EngineError::Internal(format!(
                    "embedding dimensionality mismatch: stored {} vs query {}",
                    message.embedding.len(),
                    query.len()
                )));
            }

            // Both vectors are non-zero here, so the score is defined.
            if let Some(score) = cosine_similarity(&query, &message.embedding) {
                if score >= self.config.similarity_threshold {
                    scored.push(ScoredMessage { score, message });
                }
            }
        }

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.message.created_at.cmp(&b.message.created_at))
        });

        Ok(scored)
    }
}

/// Cosine similarity between two equal-length vectors.
/// None when either vector is empty or has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return None;
    }

    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    Some(dot / (norm_a * norm_b))
}

fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}
