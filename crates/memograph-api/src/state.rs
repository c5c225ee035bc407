use std::sync::Arc;

use memograph_engine::{AnalyticsEngine, ContextEngine, Conversations, SimilarityEngine};
use memograph_llm::ModelClient;
use memograph_persist::GraphStore;

use crate::config::Config;

/// Shared application state passed to all handlers.
///
/// The engines are cheap Arc-holding handles; the config is loaded once and
/// never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub conversations: Conversations,
    pub context: ContextEngine,
    pub similarity: SimilarityEngine,
    pub analytics: AnalyticsEngine,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn GraphStore>, model: Arc<dyn ModelClient>) -> Self {
        let engine_config: memograph_engine::EngineConfig = config.retrieval.clone().into();

        Self {
            config: Arc::new(config),
            conversations: Conversations::new(Arc::clone(&store), Arc::clone(&model)),
            context: ContextEngine::new(Arc::clone(&store), engine_config),
            similarity: SimilarityEngine::new(
                Arc::clone(&store),
                Arc::clone(&model),
                engine_config,
            ),
            analytics: AnalyticsEngine::new(store, model),
        }
    }
}
