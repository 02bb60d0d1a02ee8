use anyhow::Result;
use expert_relay::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a level or a full directive list such as `expert_relay=debug,tower_http=info`
fn parse_log_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter).map_err(|e| {
        anyhow::anyhow!(
            "Invalid log filter: '{}' ({}). Use a level (error, warn, info, debug, trace) or target=level directives",
            filter,
            e
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // A local .env supplies the API key during development
    let dotenv_path = dotenvy::dotenv().ok();

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match parse_log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting expert relay with log level: {}", log_level);
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    server::run(config).await?;

    Ok(())
}
