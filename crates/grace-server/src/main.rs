//! Grace chat backend server.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use grace_anthropic::{AnthropicClient, ClientOptions, DEFAULT_BASE_URL};
use grace_core::persona;
use grace_server::{http, AppState, Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,grace_server=debug,grace_core=debug,grace_anthropic=debug";

/// Grace chat backend.
#[derive(Parser, Debug)]
#[command(name = "grace-server", about = "Grace chat backend")]
struct Args {
    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    api_key: String,

    /// HTTP listen host
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// HTTP listen port
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Completion model identifier
    #[arg(long, env = "ANTHROPIC_MODEL", default_value = persona::DEFAULT_MODEL)]
    model: String,

    /// Messages API base URL
    #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Minimum milliseconds between outbound completion calls
    #[arg(long, env = "GRACE_MIN_INTERVAL_MS", default_value_t = 500)]
    min_interval_ms: u64,

    /// Timeout for a single completion call, in seconds
    #[arg(long, env = "ANTHROPIC_TIMEOUT_SECS", default_value_t = 600)]
    timeout_secs: u64,

    /// Prepend a "Hello" turn when the history does not open with a user message
    #[arg(
        long,
        env = "GRACE_OPENING_GREETING",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    opening_greeting: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            host: self.host.clone(),
            port: self.port,
            model: self.model.clone(),
            min_request_interval: Duration::from_millis(self.min_interval_ms),
            opening_greeting: self.opening_greeting,
            anthropic_base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..Config::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let config = args.config();

    let client = AnthropicClient::with_options(
        args.api_key,
        ClientOptions {
            base_url: config.anthropic_base_url.clone(),
            timeout: config.request_timeout,
            ..ClientOptions::default()
        },
    )?;

    info!(base_url = %client.base_url(), "Using Messages API endpoint");

    let state = AppState::from_config(Arc::new(client), &config);
    let router = http::create_router(state);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;

    info!(
        addr = %listener.local_addr()?,
        "Starting Grace backend"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
