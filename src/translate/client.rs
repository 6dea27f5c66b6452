use std::future::Future;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::TranslateConfig;
use crate::utils::error::{BoxResult, MigrateError};

/// Something that turns a system and user message into a completion
pub trait CompletionClient {
    fn complete(&self, system: &str, user: &str) -> impl Future<Output = BoxResult<String>>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completion endpoint
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &TranslateConfig) -> BoxResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("blog-migrate/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(OpenAiClient {
            http,
            endpoint: format!("{}/chat/completions", config.api_base),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompletionClient for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> BoxResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
        };

        debug!("POST {} (model {})", self.endpoint, self.model);
        let response = self.http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(MigrateError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MigrateError::Translation(format!(
                "{} returned {}: {}", self.endpoint, status, body.trim()
            )).into());
        }

        let parsed: ChatResponse = response.json().await.map_err(MigrateError::from)?;
        first_choice(parsed)
    }
}

fn first_choice(response: ChatResponse) -> BoxResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| MigrateError::Translation("response has no message content".to_string()).into())
}
