//! Remote completion provider abstraction
//!
//! The relay never reasons about prompts itself; everything past validation is
//! delegated to an implementation of [`CompletionProvider`]. The production
//! implementation speaks the OpenAI-compatible wire format, but the trait is
//! deliberately narrow (`complete(system, prompt) -> text`) so that a
//! tool-using agent backend, or a test stub, slots in without touching the
//! handlers.

pub mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Failures from the remote completion call
///
/// No distinction is drawn between transient and permanent failures and
/// nothing is retried; every variant surfaces to the caller as HTTP 500.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("completion API response was malformed: {0}")]
    Malformed(String),
}

/// Interface to a hosted chat-completion capability
///
/// Implementations must be thread-safe; one instance is shared across all
/// in-flight requests. An optional system instruction precedes the user
/// prompt when given. Returned text is already trimmed of leading and
/// trailing whitespace.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        system: Option<&str>,
        prompt: &str,
    ) -> Result<String, ProviderError>;
}
