//! pipeline-greeter entry point.
//!
//! Initializes tracing, loads configuration, resolves the build label from the
//! environment, builds the Axum router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pipeline_greeter::config::{AppConfig, LoggingConfig, DEFAULT_LOG_FILTER};
use pipeline_greeter::http::start_server;
use pipeline_greeter::templates::init_templates;
use pipeline_greeter::{create_router, AppState};

/// pipeline-greeter: greeting page and health check
#[derive(Parser, Debug)]
#[command(name = "pipeline-greeter", version, about)]
struct Args {
    /// Optional TOML configuration file; built-in defaults are used without it
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "pipeline_greeter=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_filter: &str, logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(log_filter);
    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration first so the log format is known before tracing starts
    let config = AppConfig::load(args.config.as_deref())?.with_build_label_from_env();

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::info!(
        version = %config.app.version,
        build = %config.app.build_label(),
        health_check = config.app.health_check,
        "Loaded configuration"
    );

    let tera = init_templates()?;
    let state = AppState::new(config.clone(), tera);
    let app = create_router(state);

    if let Err(e) = start_server(app, &config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
