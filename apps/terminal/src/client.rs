//! Quote generators backed by a text-completion API.

use async_trait::async_trait;
use charades_core::{GenerationError, QuoteGenerator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;

const API_VERSION: &str = "2023-06-01";

// === API Request/Response Types ===

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl MessagesResponse {
    /// Concatenated text blocks of the reply.
    fn text(&self) -> String {
        self.content
            .iter()
            .filter(|block| block.kind == "text")
            .map(|block| block.text.as_str())
            .collect()
    }
}

/// Messages-API completion client.
pub struct CompletionClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl CompletionClient {
    pub fn new(config: &Config, api_key: String) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout: config.timeout,
        })
    }

    fn network_error(&self, error: reqwest::Error) -> GenerationError {
        if error.is_timeout() {
            GenerationError::Timeout(self.timeout.as_secs())
        } else {
            GenerationError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl QuoteGenerator for CompletionClient {
    fn name(&self) -> &'static str {
        "messages-api"
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let resp = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Service { status, message });
        }

        let body = resp.text().await.map_err(|e| self.network_error(e))?;
        let response: MessagesResponse = serde_json::from_str(&body)?;
        Ok(response.text())
    }
}

/// Generator used when no API key is configured. Always fails, so every
/// question comes from the fallback pool.
pub struct Offline;

#[async_trait]
impl QuoteGenerator for Offline {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable(
            "no API key configured".to_string(),
        ))
    }
}
