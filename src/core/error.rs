//! Relay error taxonomy and its mapping to HTTP responses

use crate::core::constants::message;
use crate::core::provider::ProviderError;
use crate::models::relay::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Every way a relay request can fail
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing 'prompt' in request body")]
    MissingPrompt,

    #[error("Could not connect to Ollama server at {url}. Is Ollama running?")]
    UpstreamUnreachable { url: String },

    #[error("Error from Ollama: {0}")]
    Upstream(String),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Detail is logged, never sent to the client
    #[error("Unexpected error: {0}")]
    Internal(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingPrompt => StatusCode::BAD_REQUEST,
            RelayError::NotFound => StatusCode::NOT_FOUND,
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::UpstreamUnreachable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::Upstream(_) | RelayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message placed in the `error` field of the response body
    pub fn client_message(&self) -> String {
        match self {
            RelayError::MissingPrompt => message::MISSING_PROMPT.to_string(),
            RelayError::Internal(_) => message::INTERNAL_ERROR.to_string(),
            other => other.to_string(),
        }
    }

    /// Log the failure at a level matching its cause
    pub fn log(&self) {
        match self {
            RelayError::MissingPrompt | RelayError::NotFound | RelayError::MethodNotAllowed => {
                warn!("Rejected request: {}", self)
            }
            RelayError::UpstreamUnreachable { url } => {
                error!("Ollama unreachable at {}", url)
            }
            RelayError::Upstream(detail) => error!("Ollama returned an error: {}", detail),
            RelayError::Internal(detail) => {
                error!("An unexpected error occurred: {}", detail)
            }
        }
    }
}

impl From<ProviderError> for RelayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unreachable { url } => RelayError::UpstreamUnreachable { url },
            other => RelayError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.client_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
