// lingolens - Translation and OCR proxy for Google Cloud APIs

use anyhow::{Context, Result};
use clap::Parser;
use lingolens::cli::Args;
use lingolens::config::{ApiKey, AppConfig};
use lingolens::google::GoogleClient;
use lingolens::server::create_router;
use lingolens::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    args.apply(&mut config);

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers.max(1))
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?
        .block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting lingolens v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Load the API key; refuse to serve without it
    let api_key = ApiKey::from_env(&config.google.api_key_env)?;

    // Phase 4: Build the upstream client
    let google_client = GoogleClient::new(&config.google, api_key)?;

    // Phase 5: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, google_client)?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
