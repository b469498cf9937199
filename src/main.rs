//! ping-pong: the application entry point.
//!
//! Initializes tracing, resolves configuration from an optional TOML file and
//! the environment, builds the Axum router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ping_pong::config::{AppConfig, SERVICE_VERSION};
use ping_pong::{build_app, http::start_server};

/// ping-pong: a minimal HTTP service for deployment pipeline checks
#[derive(Parser, Debug)]
#[command(name = "ping-pong", version, about)]
struct Args {
    /// Optional configuration file; environment variables override its values
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "ping_pong=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration first: DEBUG decides the default log filter
    let config = AppConfig::load(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.default_log_filter().to_string());

    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        app_name = %config.service.name,
        version = SERVICE_VERSION,
        "Starting application"
    );
    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        debug = config.service.debug,
        iseven = config.service.enable_iseven,
        "Loaded configuration"
    );

    let app = build_app(config.clone())?;
    tracing::info!(template_dir = %config.service.template_dir, "Initialized templates");

    start_server(app, &config).await?;

    Ok(())
}
