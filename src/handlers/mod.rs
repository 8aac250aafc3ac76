//! HTTP request handlers for the relay API

use crate::config::Config;
use crate::middleware::request_id_middleware;
use crate::provider::CompletionProvider;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod ask;
pub mod chat;
pub mod health;

/// Application state shared across all handlers
///
/// Holds the read-only configuration and the completion provider. Both are
/// Arc'd for cheap cloning across Axum handlers; nothing here is mutated
/// after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// Create a new AppState from configuration and a provider
    pub fn new(config: Arc<Config>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { config, provider }
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get reference to the completion provider
    pub fn provider(&self) -> &dyn CompletionProvider {
        self.provider.as_ref()
    }
}

/// Build the application router with all routes and middleware
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat::handler))
        .route("/ask", post(ask::handler))
        .route("/health", get(health::handler))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::provider::ProviderError;
    use async_trait::async_trait;

    /// Deterministic provider stub returning a fixed reply
    struct FixedReplyProvider(&'static str);

    #[async_trait]
    impl CompletionProvider for FixedReplyProvider {
        async fn complete(
            &self,
            _system: Option<&str>,
            _prompt: &str,
        ) -> Result<String, ProviderError> {
            Ok(self.0.trim().to_string())
        }
    }

    fn create_test_config() -> Config {
        Config::from_str(
            r#"
[server]
host = "127.0.0.1"
port = 8000

[provider]
base_url = "http://localhost:9999/v1"
model = "test-model"
"#,
        )
        .expect("should parse test config")
    }

    #[test]
    fn test_appstate_new_creates_state() {
        let config = Arc::new(create_test_config());
        let state = AppState::new(config, Arc::new(FixedReplyProvider("ok")));

        assert_eq!(state.config().server.port, 8000);
        assert_eq!(state.config().provider.model, "test-model");
    }

    #[test]
    fn test_appstate_is_clonable() {
        let config = Arc::new(create_test_config());
        let state = AppState::new(config, Arc::new(FixedReplyProvider("ok")));

        // Clone should work (cheap Arc clone)
        let state2 = state.clone();
        assert_eq!(state2.config().server.host, "127.0.0.1");
    }

    #[test]
    fn test_app_builds_router() {
        let config = Arc::new(create_test_config());
        let state = AppState::new(config, Arc::new(FixedReplyProvider("ok")));
        let _router = app(state);
    }
}
