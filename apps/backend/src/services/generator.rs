//! Generative text provider.
//!
//! Stories and example sentences come from an OpenAI-compatible chat
//! completions endpoint. Calls are made once; failures go straight back to
//! the caller.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;

/// Generation errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("No generator API key configured (set GENERATOR_API_KEY)")]
    MissingApiKey,

    #[error("Generator rejected the API key")]
    Unauthorized,

    #[error("Generator quota exceeded: {0}")]
    Quota(String),

    #[error("Generator error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Generator returned no text")]
    MalformedResponse,

    #[error("Network error: {0}")]
    Network(String),
}

/// Turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Chat completions client.
pub struct HttpGenerator {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    model: String,
}

impl HttpGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            endpoint: format!(
                "{}/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            model: config.model.clone(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

#[async_trait]
impl TextGenerator for HttpGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        let api_key = self.api_key.as_deref().ok_or(GenerateError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(model = %self.model, "requesting completion");
        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerateError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(status_error(status, message));
        }

        let response: ChatResponse = resp
            .json()
            .await
            .map_err(|_| GenerateError::MalformedResponse)?;

        extract_text(response)
    }
}

fn status_error(status: StatusCode, message: String) -> GenerateError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerateError::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => GenerateError::Quota(message),
        _ => GenerateError::Backend {
            status: status.as_u16(),
            message,
        },
    }
}

fn extract_text(response: ChatResponse) -> Result<String, GenerateError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or(GenerateError::MalformedResponse)
}
