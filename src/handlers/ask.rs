//! Ask endpoint handler
//!
//! Handles POST /ask: the agent-flavored variant of the relay. The body
//! carries a `prompt` field and no system instruction is sent; whatever
//! reasoning or tool use happens behind the provider is the provider's
//! concern, not this handler's.

use crate::error::{AppError, AppResult};
use crate::handlers::AppState;
use crate::handlers::chat::ChatResponse;
use crate::middleware::RequestId;
use axum::{Extension, Json, extract::State};
use serde::Deserialize;

/// Ask request from client
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    prompt: Option<String>,
}

impl AskRequest {
    /// Extract the prompt, rejecting missing or empty input
    fn prompt(&self) -> AppResult<&str> {
        match self.prompt.as_deref() {
            Some(prompt) if !prompt.is_empty() => Ok(prompt),
            _ => Err(AppError::Validation("Prompt is required".to_string())),
        }
    }
}

/// POST /ask handler
pub async fn handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<AskRequest>,
) -> AppResult<Json<ChatResponse>> {
    let prompt = request.prompt()?;

    tracing::debug!(
        request_id = %request_id,
        prompt_length = prompt.len(),
        "Received ask request"
    );

    let reply = state
        .provider()
        .complete(None, prompt)
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
