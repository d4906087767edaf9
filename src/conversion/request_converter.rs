//! Relay request to Ollama chat request conversion

use crate::core::constants::role;
use crate::models::ollama::{ChatMessage, ChatRequest};

/// Build the upstream chat request for a validated prompt
///
/// The model comes from configuration, never from the client, and streaming
/// is always off.
pub fn build_chat_request(prompt: &str, model: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: role::USER.to_string(),
            content: prompt.to_string(),
        }],
        stream: false,
    }
}
