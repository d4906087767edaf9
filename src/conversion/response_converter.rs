//! Ollama chat response to relay response conversion

use crate::models::ollama::ChatResponse;
use crate::models::relay::RelayResponse;

/// Pull `message.content` out of an upstream response, empty if absent
pub fn extract_content(response: &ChatResponse) -> String {
    response
        .message
        .as_ref()
        .and_then(|message| message.content.clone())
        .unwrap_or_default()
}

/// Convert an upstream response into the client-facing body
pub fn convert_chat_response(response: &ChatResponse) -> RelayResponse {
    RelayResponse {
        response: extract_content(response),
    }
}
