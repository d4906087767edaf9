//! Ollama provider implementation

use crate::core::provider::{Provider, ProviderError};
use crate::models::ollama::{ChatRequest, ChatResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for a local Ollama server's chat endpoint
pub struct OllamaProvider {
    client: Client,
    url: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Arguments
    ///
    /// * `url` - Full URL of the chat endpoint
    /// * `timeout` - Optional request timeout in seconds; none when `None`
    pub fn new(url: String, timeout: Option<u64>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, url })
    }

    fn classify_send_error(&self, err: reqwest::Error) -> ProviderError {
        if err.is_connect() {
            ProviderError::Unreachable {
                url: self.url.clone(),
            }
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl Provider for OllamaProvider {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ProviderError> {
        debug!(
            "Sending chat request to {}: model={}, messages={}",
            self.url,
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Ollama responded with {}: {}", status, body);
            return Err(ProviderError::Status {
                status,
                url: self.url.clone(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))
    }

    fn endpoint(&self) -> &str {
        &self.url
    }

    fn provider_name(&self) -> &str {
        "Ollama"
    }
}
