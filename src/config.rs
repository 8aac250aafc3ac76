//! Configuration management for Promptrelay
//!
//! Parses TOML configuration files and provides typed access to settings.
//! The provider credential is deliberately NOT part of the file format: it is
//! read once at startup from the [`API_KEY_ENV`] environment variable and
//! handed to the provider constructor, so no secret ever lands in a config
//! file or in serialized output.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the remote provider credential
pub const API_KEY_ENV: &str = "PROMPTRELAY_API_KEY";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Remote completion provider configuration
///
/// `base_url` points at an OpenAI-compatible API root (e.g.
/// `https://api.openai.com/v1`); the model identifier is fixed here and never
/// exposed as a request parameter.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    /// System instruction sent ahead of the user message on `/chat`.
    /// `/ask` omits it regardless of this setting.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

fn default_system_prompt() -> String {
    "You are a helpful assistant.".to_string()
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AppError::Config(format!(
                "failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_str(&contents)
    }

    /// Parse and validate configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| AppError::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate invariants that serde cannot express
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.provider.model.trim().is_empty() {
            return Err(AppError::Config(
                "provider.model must not be empty".to_string(),
            ));
        }
        if !self.provider.base_url.starts_with("http://")
            && !self.provider.base_url.starts_with("https://")
        {
            return Err(AppError::Config(format!(
                "provider.base_url must be an http(s) URL, got {:?}",
                self.provider.base_url
            )));
        }
        Ok(())
    }
}

/// Read the provider credential from the environment
///
/// Called once at startup; a missing or empty credential is fatal before the
/// listener binds, matching the "unhandled startup error" policy.
pub fn api_key_from_env() -> AppResult<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(AppError::Config(format!(
            "environment variable {} must be set to the provider API key",
            API_KEY_ENV
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[provider]
base_url = "https://api.openai.com/v1"
model = "gpt-4o-mini"
"#;

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let config = Config::from_str(MINIMAL).expect("minimal config should parse");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.provider.model, "gpt-4o-mini");
        assert_eq!(
            config.provider.system_prompt,
            "You are a helpful assistant."
        );
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 3000

[provider]
base_url = "http://localhost:1234/v1"
model = "local-model"
system_prompt = "Answer tersely."

[observability]
log_level = "debug"
"#;
        let config = Config::from_str(toml).expect("config should parse");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.provider.base_url, "http://localhost:1234/v1");
        assert_eq!(config.provider.system_prompt, "Answer tersely.");
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_missing_provider_section_is_rejected() {
        let err = Config::from_str("[server]\nport = 3000\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let toml = r#"
[server]
port = 0

[provider]
base_url = "https://api.openai.com/v1"
model = "gpt-4o-mini"
"#;
        let err = Config::from_str(toml).unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_empty_model_is_rejected() {
        let toml = r#"
[provider]
base_url = "https://api.openai.com/v1"
model = "  "
"#;
        let err = Config::from_str(toml).unwrap_err();
        assert!(err.to_string().contains("model"));
    }

    #[test]
    fn test_non_http_base_url_is_rejected() {
        let toml = r#"
[provider]
base_url = "ftp://api.openai.com/v1"
model = "gpt-4o-mini"
"#;
        let err = Config::from_str(toml).unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_config_does_not_serialize_a_credential() {
        let config = Config::from_str(MINIMAL).expect("minimal config should parse");
        let serialized = toml::to_string(&config).expect("config should serialize");
        assert!(!serialized.to_lowercase().contains("key"));
    }
}
