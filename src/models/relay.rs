//! Relay API data models
//!
//! Structures for the client-facing `POST /api/chat` endpoint.

use serde::Serialize;
use serde_json::Value;

/// Inbound request body
#[derive(Debug, Clone, PartialEq)]
pub struct RelayRequest {
    pub prompt: String,
}

impl RelayRequest {
    /// Extract a usable prompt from a parsed JSON body
    ///
    /// Returns `None` when `prompt` is absent, null, not a string, or empty.
    /// The prompt is taken verbatim; whitespace is not trimmed.
    pub fn from_body(body: &Value) -> Option<Self> {
        match body.get("prompt") {
            Some(Value::String(prompt)) if !prompt.is_empty() => Some(Self {
                prompt: prompt.clone(),
            }),
            _ => None,
        }
    }
}

/// Successful relay response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayResponse {
    pub response: String,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
