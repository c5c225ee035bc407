use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use memograph_api::{
    config::Config,
    routes::{analysis, health, messages, threads},
    state::AppState,
};
use memograph_llm::{ModelClient, OpenAIClient};
use memograph_persist::{GraphStore, MongoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting memograph API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    // Initialize provider client
    tracing::info!("Initializing OpenAI client");
    let model: Arc<dyn ModelClient> = Arc::new(OpenAIClient::with_models(
        config.openai_api_key.clone(),
        config.provider.embedding_model.clone(),
        config.provider.completion_model.clone(),
    )?);

    // Initialize store
    tracing::info!("Connecting to MongoDB");
    let store: Arc<dyn GraphStore> = Arc::new(
        MongoStore::connect(&config.mongodb_uri, &config.mongodb.database).await?,
    );

    // Create application state
    let state = Arc::new(AppState::new(config.clone(), store, model));

    // Build router
    let app = build_router(state.clone());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/api/v1/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Threads
        .route("/threads", post(threads::create_thread))
        .route("/threads/similar", get(threads::find_similar_threads))
        .route("/threads/:thread_id", get(threads::get_thread))
        .route("/threads/:thread_id/status", patch(threads::update_thread_status))
        .route("/threads/:thread_id/summary", get(threads::get_thread_summary))
        .route("/threads/:thread_id/context", get(threads::get_thread_context))
        // Messages
        .route("/messages", post(messages::create_message))
        .route("/messages/similar", get(messages::find_similar_messages))
        .route("/messages/:message_id", get(messages::get_message))
        // Analysis
        .route("/analysis/thread/:thread_id/stats", get(analysis::get_thread_statistics))
        .route("/analysis/thread/:thread_id/patterns", get(analysis::analyze_conversation_patterns))
        .route("/analysis/thread/:thread_id/topics", get(analysis::get_topic_evolution));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(60)))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &memograph_api::config::Config) -> CorsLayer {
    if config.cors.enabled {
        let mut cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PATCH,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any);

        if config.cors.origins.iter().any(|o| o == "*") {
            cors = cors.allow_origin(Any);
        } else {
            for origin in &config.cors.origins {
                if let Ok(parsed_origin) = origin.parse::<axum::http::HeaderValue>() {
                    cors = cors.allow_origin(parsed_origin);
                }
            }
        }

        cors
    } else {
        CorsLayer::permissive()
    }
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
