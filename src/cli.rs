//! Command-line interface for Promptrelay
//!
//! Provides argument parsing and subcommand handling for the promptrelay
//! binary.

use clap::{Parser, Subcommand};

/// HTTP relay endpoint for hosted LLM completions
#[derive(Parser)]
#[command(name = "promptrelay")]
#[command(version)]
#[command(about = "HTTP relay endpoint for hosted LLM completions")]
#[command(
    long_about = "Promptrelay accepts an HTTP POST carrying a user message, forwards it to a \
    remote chat-completion provider, and returns the provider's reply as JSON."
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a template configuration file
    Config {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template configuration content
pub fn generate_config_template() -> &'static str {
    r#"# Promptrelay Configuration
# =========================
#
# The provider API key is NOT set here. Export it before starting:
#
#   export PROMPTRELAY_API_KEY="sk-..."

[server]
# IP address to bind to (0.0.0.0 for all interfaces, 127.0.0.1 for localhost only)
host = "0.0.0.0"

# Port to listen on
port = 8000

[provider]
# OpenAI-compatible API root
base_url = "https://api.openai.com/v1"

# Model identifier (fixed for the process; not a request parameter)
model = "gpt-4o-mini"

# System instruction sent on /chat. /ask always omits it.
system_prompt = "You are a helpful assistant."

[observability]
# Log level: trace, debug, info, warn, error (RUST_LOG overrides)
log_level = "info"

# Try it:
#   curl -X POST http://127.0.0.1:8000/chat \
#     -H "Content-Type: application/json" \
#     -d '{"message": "Tell me a joke"}'
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_template_is_a_loadable_config() {
        let config =
            Config::from_str(generate_config_template()).expect("template should parse");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.provider.model, "gpt-4o-mini");
    }

    #[test]
    fn test_cli_defaults_to_config_toml() {
        let cli = Cli::parse_from(["promptrelay"]);
        assert_eq!(cli.config, "config.toml");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_config_subcommand_parses_output() {
        let cli = Cli::parse_from(["promptrelay", "config", "--output", "out.toml"]);
        match cli.command {
            Some(Command::Config { output }) => assert_eq!(output.as_deref(), Some("out.toml")),
            _ => panic!("expected config subcommand"),
        }
    }
}
