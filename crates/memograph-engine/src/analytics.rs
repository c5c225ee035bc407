use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use memograph_llm::{ModelClient, TranscriptTurn};
use memograph_persist::{GraphStore, Message, MessageRole};

use crate::error::{EngineError, Result};

/// Wall-clock bucket width for topic evolution, in seconds
const TOPIC_BUCKET_SECONDS: i64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadStats {
    pub message_statistics: MessageStatistics,
    pub time_metrics: TimeMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageStatistics {
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub user_message_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeMetrics {
    pub thread_duration_minutes: f64,
    pub messages_per_hour: f64,
    pub first_message: DateTime<Utc>,
    pub last_message: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationPatterns {
    pub response_time_analysis: ResponseTimeAnalysis,
    pub message_length_analysis: MessageLengthAnalysis,
}

/// Seconds between adjacent messages where the speaker changed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTimeAnalysis {
    pub average_response_time: f64,
    pub min_response_time: f64,
    pub max_response_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageLengthAnalysis {
    pub user: LengthStats,
    pub assistant: LengthStats,
}

/// Character-count statistics for one role; all zero when the role is absent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthStats {
    pub average_length: f64,
    pub min_length: usize,
    pub max_length: usize,
}

/// One non-empty 5-minute bucket of the thread timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicWindow {
    pub timestamp: DateTime<Utc>,
    pub topics: Vec<String>,
    pub message_count: usize,
}

/// Whole-thread summary; derived on every request, never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub id: Uuid,
    pub message_count: usize,
    pub last_message_at: DateTime<Utc>,
    pub topics: Vec<String>,
    pub summary: String,
}

/// Read-only statistical and topical analysis over a thread's ordered messages
#[derive(Clone)]
pub struct AnalyticsEngine {
    store: Arc<dyn GraphStore>,
    model: Arc<dyn ModelClient>,
}

impl AnalyticsEngine {
    pub fn new(store: Arc<dyn GraphStore>, model: Arc<dyn ModelClient>) -> Self {
        Self { store, model }
    }

    /// Aggregate counts, ratios and activity metrics for a thread
    pub async fn thread_stats(&self, thread_id: Uuid) -> Result<ThreadStats> {
        let messages = self.ordered_messages(thread_id).await?;

        let total = messages.len();
        let user_messages = messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count();
        let assistant_messages = total - user_messages;

        let first = messages[0].created_at;
        let last = messages[total - 1].created_at;
        let duration_seconds = (last - first).num_milliseconds() as f64 / 1000.0;

        let messages_per_hour = if duration_seconds > 0.0 {
            total as f64 / (duration_seconds / 3600.0)
        } else {
            0.0
        };

        Ok(ThreadStats {
            message_statistics: MessageStatistics {
                total_messages: total,
                user_messages,
                assistant_messages,
                user_message_ratio: user_messages as f64 / total as f64,
            },
            time_metrics: TimeMetrics {
                thread_duration_minutes: duration_seconds / 60.0,
                messages_per_hour,
                first_message: first,
                last_message: last,
            },
        })
    }

    /// Response-time and message-length dynamics of a conversation
    pub async fn conversation_patterns(&self, thread_id: Uuid) -> Result<ConversationPatterns> {
        let messages = self.ordered_messages(thread_id).await?;

        let mut response_times = Vec::new();
        for pair in messages.windows(2) {
            if pair[0].role != pair[1].role {
                let delta = (pair[1].created_at - pair[0].created_at).num_milliseconds() as f64
                    / 1000.0;
                response_times.push(delta);
            }
        }

        let user_lengths: Vec<usize> = messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .map(|m| m.content.chars().count())
            .collect();
        let assistant_lengths: Vec<usize> = messages
            .iter()
            .filter(|m| m.role == MessageRole::Assistant)
            .map(|m| m.content.chars().count())
            .collect();

        Ok(ConversationPatterns {
            response_time_analysis: response_time_stats(&response_times),
            message_length_analysis: MessageLengthAnalysis {
                user: length_stats(&user_lengths),
                assistant: length_stats(&assistant_lengths),
            },
        })
    }

    /// Topic extraction over epoch-aligned 5-minute buckets of the timeline.
    ///
    /// Buckets with no messages produce no entry; one provider call is made
    /// per non-empty bucket.
    pub async fn topic_evolution(&self, thread_id: Uuid) -> Result<Vec<TopicWindow>> {
        let messages = self.ordered_messages(thread_id).await?;

        let mut buckets: BTreeMap<i64, Vec<&str>> = BTreeMap::new();
        for message in &messages {
            let start = bucket_start(message.created_at.timestamp());
            buckets.entry(start).or_default().push(&message.content);
        }

        let mut evolution = Vec::with_capacity(buckets.len());
        for (start, contents) in buckets {
            let combined = contents.join(" ");
            let topics = self
                .model
                .extract_topics(&combined)
                .await
                .map_err(EngineError::Provider)?;

            let timestamp = Utc
                .timestamp_opt(start, 0)
                .single()
                .ok_or_else(|| EngineError::Internal(format!("invalid bucket timestamp {}", start)))?;

            evolution.push(TopicWindow {
                timestamp,
                topics,
                message_count: contents.len(),
            });
        }

        Ok(evolution)
    }

    /// Whole-thread summary: one topic-extraction call over all content and
    /// one summarization call over the full transcript. Heavier than
    /// `topic_evolution`, which works per bucket.
    pub async fn thread_summary(&self, thread_id: Uuid) -> Result<ThreadSummary> {
        let messages = self.ordered_messages(thread_id).await?;

        let all_content = messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let topics = self
            .model
            .extract_topics(&all_content)
            .await
            .map_err(EngineError::Provider)?;

        let transcript: Vec<TranscriptTurn> = messages
            .iter()
            .map(|m| TranscriptTurn::new(m.role.as_str(), m.content.clone()))
            .collect();
        let summary = self
            .model
            .summarize_thread(&transcript)
            .await
            .map_err(EngineError::Provider)?;

        Ok(ThreadSummary {
            id: thread_id,
            message_count: messages.len(),
            last_message_at: messages[messages.len() - 1].created_at,
            topics,
            summary,
        })
    }

    /// Ordered messages of a thread; an empty result surfaces as not-found.
    /// Missing and empty threads are intentionally indistinguishable here.
    async fn ordered_messages(&self, thread_id: Uuid) -> Result<Vec<Message>> {
        let messages = self.store.thread_messages(thread_id).await?;
        if messages.is_empty() {
            return Err(EngineError::ThreadNotFound(thread_id));
        }
        Ok(messages)
    }
}

/// Floor a unix timestamp to its 5-minute boundary
fn bucket_start(timestamp: i64) -> i64 {
    timestamp - timestamp.rem_euclid(TOPIC_BUCKET_SECONDS)
}

fn response_time_stats(samples: &[f64]) -> ResponseTimeAnalysis {
    if samples.is_empty() {
        return ResponseTimeAnalysis {
            average_response_time: 0.0,
            min_response_time: 0.0,
            max_response_time: 0.0,
        };
    }

    let sum: f64 = samples.iter().sum();
    ResponseTimeAnalysis {
        average_response_time: sum / samples.len() as f64,
        min_response_time: samples.iter().copied().fold(f64::INFINITY, f64::min),
        max_response_time: samples.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

fn length_stats(lengths: &[usize]) -> LengthStats {
    if lengths.is_empty() {
        return LengthStats {
            average_length: 0.0,
            min_length: 0,
            max_length: 0,
        };
    }

    let sum: usize = lengths.iter().sum();
    LengthStats {
        average_length: sum as f64 / lengths.len() as f64,
        min_length: lengths.iter().copied().min().unwrap_or(0),
        max_length: lengths.iter().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_start_floors_to_five_minute_boundary() {
        assert_eq!(bucket_start(0), 0);
        assert_eq!(bucket_start(299), 0);
        assert_eq!(bucket_start(300), 300);
        assert_eq!(bucket_start(6 * 60), 300);
        assert_eq!(bucket_start(12 * 60), 600);
    }

    #[test]
    fn response_time_stats_zero_without_samples() {
        let stats = response_time_stats(&[]);
        assert_eq!(stats.average_response_time, 0.0);
        assert_eq!(stats.min_response_time, 0.0);
        assert_eq!(stats.max_response_time, 0.0);
    }

    #[test]
    fn response_time_stats_aggregates_samples() {
        let stats = response_time_stats(&[2.0, 4.0, 6.0]);
        assert_eq!(stats.average_response_time, 4.0);
        assert_eq!(stats.min_response_time, 2.0);
        assert_eq!(stats.max_response_time, 6.0);
    }

    #[test]
    fn length_stats_zero_for_absent_role() {
        let stats = length_stats(&[]);
        assert_eq!(stats.average_length, 0.0);
        assert_eq!(stats.min_length, 0);
        assert_eq!(stats.max_length, 0);
    }

    #[test]
    fn length_stats_aggregates_lengths() {
        let stats = length_stats(&[5, 10, 15]);
        assert_eq!(stats.average_length, 10.0);
        assert_eq!(stats.min_length, 5);
        assert_eq!(stats.max_length, 15);
    }
}
