//! Environment-driven configuration.

use std::path::PathBuf;

/// Default OpenAI-compatible endpoint.
pub const DEFAULT_GENERATOR_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion model.
pub const DEFAULT_GENERATOR_MODEL: &str = "gpt-4o-mini";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Postgres connection string. Without it words live in memory.
    pub database_url: Option<String>,
    pub generator: GeneratorConfig,
    pub story_cache_path: PathBuf,
}

/// Generative text provider settings.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// Env vars:
    /// - HOST, PORT: listen address (default 0.0.0.0:3000)
    /// - DATABASE_URL: Postgres word store (optional)
    /// - GENERATOR_API_KEY: provider key (optional, generation fails without it)
    /// - GENERATOR_BASE_URL, GENERATOR_MODEL: provider endpoint and model
    /// - STORY_CACHE_PATH: where the last story is kept
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match non_empty_var("PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a number, got {port}"))?,
            None => 3000,
        };

        Ok(Self {
            host: non_empty_var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url: non_empty_var("DATABASE_URL"),
            generator: GeneratorConfig {
                api_key: non_empty_var("GENERATOR_API_KEY"),
                base_url: non_empty_var("GENERATOR_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GENERATOR_BASE_URL.to_string()),
                model: non_empty_var("GENERATOR_MODEL")
                    .unwrap_or_else(|| DEFAULT_GENERATOR_MODEL.to_string()),
            },
            story_cache_path: non_empty_var("STORY_CACHE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_story_cache_path),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn default_story_cache_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("palavras")
        .join("story.json")
}
