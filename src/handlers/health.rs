//! Health check endpoint
//!
//! Provides a simple health check for monitoring and load balancers. The
//! relay holds no state worth inspecting, so this only confirms the process
//! is serving.

use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: &'static str,
}

/// Health check handler
pub async fn handler() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "OK" }))
}
