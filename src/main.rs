//! Promptrelay HTTP server
//!
//! Starts an Axum web server that relays prompts to a hosted LLM completion
//! API.

use clap::Parser;
use promptrelay::cli::{Cli, Command};
use promptrelay::config::{self, Config};
use promptrelay::handlers::{self, AppState};
use promptrelay::provider::OpenAiProvider;
use promptrelay::{cli, telemetry};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    if let Some(Command::Config { output }) = args.command {
        let template = cli::generate_config_template();
        match output {
            Some(path) => {
                std::fs::write(&path, template)?;
                println!("Wrote configuration template to {}", path);
            }
            None => print!("{}", template),
        }
        return Ok(());
    }

    // Load configuration
    let config = Config::from_file(&args.config)?;

    // Initialize telemetry
    telemetry::init(&config.observability.log_level);

    // Credential comes from the environment; absence is fatal before binding
    let api_key = config::api_key_from_env()?;
    let provider = Arc::new(OpenAiProvider::new(&config.provider, api_key));

    tracing::info!(
        "Starting Promptrelay server on {}:{}",
        config.server.host,
        config.server.port
    );
    tracing::info!(
        model = %config.provider.model,
        base_url = %config.provider.base_url,
        "Relaying completions"
    );

    // Create socket address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .unwrap_or_else(|_| std::net::IpAddr::from([0, 0, 0, 0])),
        config.server.port,
    ));

    // Build router
    let state = AppState::new(Arc::new(config), provider);
    let app = handlers::app(state);

    tracing::info!("Listening on {}", addr);
    tracing::info!("Health check available at http://{}/health", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
