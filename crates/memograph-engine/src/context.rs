use std::sync::Arc;

use uuid::Uuid;

use memograph_persist::{GraphStore, Message};

use crate::config::{EngineConfig, MAX_CONTEXT_WINDOW_MINUTES};
use crate::error::{EngineError, Result};

/// Windowed context extraction over a thread's message timeline.
///
/// Ordering is always derived from `created_at`; adjacency is not stored.
#[derive(Clone)]
pub struct ContextEngine {
    store: Arc<dyn GraphStore>,
    config: EngineConfig,
}

impl ContextEngine {
    pub fn new(store: Arc<dyn GraphStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Get context from a thread, optionally centered on an anchor message.
    ///
    /// Without an anchor, `window` is a message count: the most recent
    /// `window` messages, returned oldest-to-newest. With an anchor,
    /// `window` is a time radius in minutes: every message whose distance
    /// from the anchor's timestamp is within the radius. The time-radius
    /// variant can return more or fewer messages than the count variant
    /// depending on message density.
    pub async fn get_context(
        &self,
        thread_id: Uuid,
        anchor_message_id: Option<Uuid>,
        window: Option<u32>,
    ) -> Result<Vec<Message>> {
        let window = window.unwrap_or(self.config.context_window_minutes);
        if window == 0 || window > MAX_CONTEXT_WINDOW_MINUTES {
            return Err(EngineError::Validation(format!(
                "window_size must be between 1 and {}",
                MAX_CONTEXT_WINDOW_MINUTES
            )));
        }

        match anchor_message_id {
            Some(message_id) => self.window_around(thread_id, message_id, window).await,
            None => self.most_recent(thread_id, window).await,
        }
    }

    async fn most_recent(&self, thread_id: Uuid, window: u32) -> Result<Vec<Message>> {
        self.store
            .get_thread(thread_id)
            .await?
            .ok_or(EngineError::ThreadNotFound(thread_id))?;

        // The store sorts newest-first for the LIMIT; callers get ascending order.
        let mut messages = self.store.recent_messages(thread_id, i64::from(window)).await?;
        messages.reverse();
        Ok(messages)
    }

    async fn window_around(
        &self,
        thread_id: Uuid,
        message_id: Uuid,
        window: u32,
    ) -> Result<Vec<Message>> {
        let anchor = self
            .store
            .get_message(message_id)
            .await?
            .filter(|message| message.thread_id == thread_id)
            .ok_or(EngineError::MessageNotFound(message_id))?;

        let radius_seconds = i64::from(window) * 60;
        let messages = self.store.thread_messages(thread_id).await?;

        Ok(messages
            .into_iter()
            .filter(|message| {
                (message.created_at - anchor.created_at)
                    .num_seconds()
                    .abs()
                    <= radius_seconds
            })
            .collect())
    }
}
