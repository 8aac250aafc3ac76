//! Promptrelay - HTTP relay endpoint for hosted LLM completions
//!
//! This library exposes a small axum service that validates an incoming
//! prompt, forwards it to a remote chat-completion provider, and maps the
//! result back into an HTTP response.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod provider;
pub mod telemetry;
