//! Ollama Chat Relay
//!
//! This application accepts a prompt from a browser frontend on
//! `POST /api/chat`, forwards it to a local Ollama server's chat API and
//! relays the generated reply, with permissive CORS on every route.

mod api;
mod conversion;
mod core;
mod models;

#[cfg(test)]
mod test_support;

use crate::api::endpoints::{AppState, create_router};
use crate::core::config::Config;
use crate::core::logging::init_logging;
use crate::core::provider::Provider;
use crate::core::providers::OllamaProvider;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_level);

    print_startup_banner(&config);

    let provider: Arc<dyn Provider> =
        match OllamaProvider::new(config.ollama_url.clone(), config.request_timeout) {
            Ok(provider) => Arc::new(provider),
            Err(e) => {
                error!("Failed to initialise Ollama client: {:#}", e);
                std::process::exit(1);
            }
        };

    info!(
        "Using provider: {} at {}",
        provider.provider_name(),
        provider.endpoint()
    );

    let app_state = AppState {
        config: config.clone(),
        provider,
    };

    let app = create_router(app_state);

    let addr = config.listen_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Server listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config) {
    println!("🚀 Ollama Chat Relay v{}", env!("CARGO_PKG_VERSION"));
    println!("✅ Configuration loaded successfully");
    println!("   Ollama URL: {}", config.ollama_url);
    println!("   Model: {}", config.model);
    match config.request_timeout {
        Some(secs) => println!("   Request Timeout: {}s", secs),
        None => println!("   Request Timeout: none"),
    }
    println!("   Server: {}", config.listen_addr());
    println!();
}

/// Print help message
fn print_help() {
    println!("Ollama Chat Relay v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: ollama-relay [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Configuration file:");
    println!("  CONFIG_PATH - TOML file to load (default: config.toml, optional)");
    println!();
    println!("Environment variables (override the file):");
    println!("  HOST - Server host (default: 0.0.0.0)");
    println!("  PORT - Server port (default: 5001)");
    println!("  LOG_LEVEL - Logging level (default: info)");
    println!("  OLLAMA_URL - Ollama chat endpoint (default: http://localhost:11434/api/chat)");
    println!("  OLLAMA_MODEL - Model sent with every request (default: phi3:mini)");
    println!("  OLLAMA_TIMEOUT - Upstream request timeout in seconds (default: none)");
    println!();
    println!("Endpoint:");
    println!("  POST /api/chat  {{\"prompt\": \"...\"}} -> {{\"response\": \"...\"}}");
}
