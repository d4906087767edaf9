//! API endpoint handlers
//!
//! This module implements the relay's single endpoint, `POST /api/chat`,
//! which forwards a prompt to Ollama and returns the generated reply.

use crate::conversion::request_converter::build_chat_request;
use crate::conversion::response_converter::convert_chat_response;
use crate::core::config::Config;
use crate::core::error::RelayError;
use crate::core::provider::Provider;
use crate::models::relay::{RelayRequest, RelayResponse};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn Provider>,
}

/// Create the API router with all endpoints
///
/// Request bodies are unbounded: prompts of any size are relayed.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// POST /api/chat - Relay a prompt to Ollama
///
/// The body is taken as raw bytes so that malformed JSON ends up on the
/// generic internal-error path instead of an extractor rejection.
#[tracing::instrument(name = "relay_chat", skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = match body {
        Ok(body) => relay_chat(&state, &body).await,
        Err(rejection) => Err(RelayError::Internal(format!(
            "Failed to read request body: {}",
            rejection.body_text()
        ))),
    };

    match result {
        Ok(reply) => Json(reply).into_response(),
        Err(e) => {
            e.log();
            e.into_response()
        }
    }
}

async fn not_found() -> RelayError {
    RelayError::NotFound
}

async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

async fn relay_chat(state: &AppState, body: &[u8]) -> Result<RelayResponse, RelayError> {
    let body: Value = serde_json::from_slice(body)
        .map_err(|e| RelayError::Internal(format!("Failed to parse request body: {}", e)))?;

    if !body.is_object() {
        return Err(RelayError::Internal(
            "Request body is not a JSON object".to_string(),
        ));
    }

    let request = RelayRequest::from_body(&body).ok_or(RelayError::MissingPrompt)?;

    info!(
        "📥 Incoming chat request: prompt_chars={}, model={}",
        request.prompt.chars().count(),
        state.config.model
    );

    let chat_request = build_chat_request(&request.prompt, &state.config.model);
    let chat_response = state.provider.chat(&chat_request).await?;

    let reply = convert_chat_response(&chat_response);
    debug!(
        "Relaying response from {}: response_chars={}",
        state.provider.provider_name(),
        reply.response.chars().count()
    );

    Ok(reply)
}
