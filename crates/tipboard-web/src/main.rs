//! Tipboard Web Server
//!
//! Run with: cargo run -p tipboard-web -- --config tipboard.toml

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tipboard_config::Config;

#[derive(Debug, Parser)]
#[command(name = "tipboard", about = "Revenue dashboard and echo chat demo server")]
struct Args {
    /// Path to a TOML config file
    #[arg(long, env = "TIPBOARD_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    // RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Tipboard Web Server...");

    std::fs::create_dir_all(&config.server.static_dir)?;
    let addr = config.socket_addr()?;

    // Create app state
    let state = tipboard_web::state::AppState::new(config)?;

    // Build router
    let app = tipboard_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);
    info!("Dashboard at http://{}/index_two", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
