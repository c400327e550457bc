pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::db::Database;
use crate::services::generator::{HttpGenerator, TextGenerator};
use crate::services::story_cache::StoryCache;
use crate::store::{MemoryWordStore, WordStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WordStore>,
    pub generator: Arc<dyn TextGenerator>,
    pub stories: Arc<StoryCache>,
}

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Word routes
        .route(
            "/api/words",
            get(routes::words::list).post(routes::words::create),
        )
        .route(
            "/api/words/:id",
            get(routes::words::get)
                .put(routes::words::update)
                .delete(routes::words::delete),
        )
        .route(
            "/api/words/:id/examples",
            post(routes::words::generate_examples),
        )
        // Backup routes
        .route(
            "/api/backup",
            get(routes::backup::export).post(routes::backup::import),
        )
        // Quiz routes
        .route("/api/quiz/check", post(routes::quiz::check))
        .route("/api/quiz/words/:id/check", post(routes::quiz::check_stored))
        // Story routes
        .route(
            "/api/story",
            get(routes::story::latest).post(routes::story::generate),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn WordStore> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(database_url).await?;

            tracing::info!("Running migrations...");
            db.run_migrations().await?;
            db.refresh().await;
            Arc::new(db)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, words are kept in memory");
            Arc::new(MemoryWordStore::new())
        }
    };

    if config.generator.api_key.is_none() {
        tracing::warn!("GENERATOR_API_KEY not set, story and example generation will fail");
    }

    let _feed = store.feed().subscribe(
        |words| tracing::debug!(count = words.len(), "Word list changed"),
        |error| tracing::warn!(%error, "Word list unavailable"),
    );

    let state = AppState {
        store,
        generator: Arc::new(HttpGenerator::new(&config.generator)),
        stories: Arc::new(StoryCache::new(config.story_cache_path.clone())),
    };

    let app = build_router(state);
    let addr = config.addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use crate::services::generator::GenerateError;

    struct NoGenerator;

    #[async_trait]
    impl TextGenerator for NoGenerator {
        async fn complete(&self, _prompt: &str) -> Result<String, GenerateError> {
            Err(GenerateError::MissingApiKey)
        }
    }

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(MemoryWordStore::new()),
            generator: Arc::new(NoGenerator),
            stories: Arc::new(StoryCache::new(
                std::env::temp_dir().join("palavras-router-test-story.json"),
            )),
        }
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = build_router(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = build_router(test_state())
            .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
