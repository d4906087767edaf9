//! Provider abstraction for the upstream inference server
//!
//! The relay talks to its upstream through this trait so the HTTP layer
//! never depends on a concrete client.

use crate::models::ollama::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Error types for provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No connection could be established
    #[error("Could not connect to {url}")]
    Unreachable { url: String },

    #[error("{status} for url: {url}: {body}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    /// Failure after the connection was made (reset, timeout, body read)
    #[error("{0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Trait for chat inference providers
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send a non-streaming chat request
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ProviderError>;

    /// URL requests are sent to
    fn endpoint(&self) -> &str;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
