mod singleton;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stickercal_core::config::{Config, StoreKind};
use stickercal_server::{AppState, app};

#[derive(Parser)]
#[command(name = "stickercal-server")]
#[command(about = "Serve sticker events over HTTP")]
struct Args {
    /// Config file (defaults to ~/.config/stickercal/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = match args.config {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    let server = config.server;

    // Ensure only one instance writes the data file
    let _lock = match server.store {
        StoreKind::File => Some(singleton::acquire_lock(&server.data_path())?),
        StoreKind::Memory => None,
    };

    let state = AppState::from_config(&server);
    let app = app(state, &server.prefix);

    let listener = tokio::net::TcpListener::bind(server.address).await?;
    tracing::info!(
        store = ?server.store,
        "stickercal-server listening on http://{}{}",
        server.address,
        server.prefix
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
