//! Common test utilities and fixtures for integration tests.
//!
//! Tests run against the in-memory word store and a scripted generator, so
//! no database or provider key is needed. Postgres-backed tests are marked
//! `#[ignore = "requires database"]` and need DATABASE_URL.

#![allow(dead_code)]

pub mod fixtures;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use palavras_backend::services::generator::{GenerateError, TextGenerator};
use palavras_backend::services::story_cache::StoryCache;
use palavras_backend::store::{MemoryWordStore, WordStore};
use palavras_backend::{build_router, AppState};
use palavras_core::Word;

/// Generator that replays queued replies and records prompts.
#[derive(Default)]
pub struct FakeGenerator {
    replies: Mutex<VecDeque<Result<String, GenerateError>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn reply(&self, text: &str) {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
    }

    pub fn fail(&self, error: GenerateError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerateError::MalformedResponse))
    }
}

/// Test context holding the store, generator and story cache behind a router.
pub struct TestContext {
    pub store: Arc<MemoryWordStore>,
    pub generator: Arc<FakeGenerator>,
    pub stories: Arc<StoryCache>,
    _dir: TempDir,
    app: Router,
}

impl TestContext {
    /// Create a context with an empty word list.
    pub fn new() -> Self {
        Self::with_words(Vec::new())
    }

    /// Create a context seeded with existing words.
    pub fn with_words(words: Vec<Word>) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(MemoryWordStore::with_words(words));
        let generator = Arc::new(FakeGenerator::default());
        let stories = Arc::new(StoryCache::new(dir.path().join("story.json")));

        let state = AppState {
            store: store.clone(),
            generator: generator.clone(),
            stories: stories.clone(),
        };

        Self {
            store,
            generator,
            stories,
            _dir: dir,
            app: build_router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    pub async fn words(&self) -> Vec<Word> {
        self.store.list().await.expect("Failed to list words")
    }
}
