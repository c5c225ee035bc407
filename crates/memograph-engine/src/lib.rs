pub mod analytics;
pub mod config;
pub mod context;
pub mod conversations;
pub mod error;
pub mod similarity;

pub use analytics::{
    AnalyticsEngine, ConversationPatterns, LengthStats, MessageLengthAnalysis, MessageStatistics,
    ResponseTimeAnalysis, ThreadStats, ThreadSummary, TimeMetrics, TopicWindow,
};
pub use config::{
    EngineConfig, MAX_CONTEXT_WINDOW_MINUTES, MAX_SIMILAR_MESSAGES, MAX_SIMILAR_THREADS,
};
pub use context::ContextEngine;
pub use conversations::Conversations;
pub use error::{EngineError, Result};
pub use similarity::SimilarityEngine;
