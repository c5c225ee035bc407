/// Upper bound on the context window size, in minutes or message count
/// depending on the retrieval mode. Bounds result size.
pub const MAX_CONTEXT_WINDOW_MINUTES: u32 = 50;

/// Cap on `limit` for message-level similarity search
pub const MAX_SIMILAR_MESSAGES: usize = 20;

/// Cap on `limit` for thread-level similarity search. Kept low because each
/// surviving thread costs a full summary materialization.
pub const MAX_SIMILAR_THREADS: usize = 10;

/// Retrieval tuning, loaded once at startup and never mutated
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Minimum cosine similarity for a candidate to count as a match
    pub similarity_threshold: f32,
    /// Default context window in minutes when the caller does not specify one
    pub context_window_minutes: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.8,
            context_window_minutes: 10,
        }
    }
}
