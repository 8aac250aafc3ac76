//! Chat endpoint handler
//!
//! Handles POST /chat: validates the message, forwards it to the completion
//! provider with the configured system instruction, and returns the reply.

use crate::error::{AppError, AppResult};
use crate::handlers::AppState;
use crate::middleware::RequestId;
use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

/// Chat request from client
///
/// The message field is optional at the serde level so that an absent field
/// reaches the handler and gets the "Message is required" validation error
/// rather than a framework deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
}

impl ChatRequest {
    /// Extract the message, rejecting missing or empty input
    fn message(&self) -> AppResult<&str> {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => Ok(message),
            _ => Err(AppError::Validation("Message is required".to_string())),
        }
    }
}

/// Chat response to client
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// Model's reply, trimmed of leading/trailing whitespace
    pub response: String,
}

/// POST /chat handler
///
/// Each request is an independent, stateless transaction: validate, one
/// blocking-style await on the provider, respond. Validation failures never
/// reach the provider; any provider failure maps to HTTP 500 with the
/// failure's description.
pub async fn handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = request.message()?;

    tracing::debug!(
        request_id = %request_id,
        message_length = message.len(),
        "Received chat request"
    );

    let system_prompt = state.config().provider.system_prompt.as_str();
    let reply = state
        .provider()
        .complete(Some(system_prompt), message)
        .await
        .inspect_err(|e| {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "Completion request failed"
            );
        })?;

    tracing::info!(
        request_id = %request_id,
        reply_length = reply.len(),
        "Completion succeeded"
    );

    Ok(Json(ChatResponse { response: reply }))
}
