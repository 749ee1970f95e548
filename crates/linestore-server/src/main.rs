use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use linestore_server::{AppState, router};
use linestore_storage::LogFile;

#[derive(Parser)]
#[command(
    name = "linestore-server",
    about = "Append-only record log with an HTTP API"
)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8009")]
    listen: SocketAddr,

    /// Path of the log file; created if it does not exist
    #[arg(long, default_value = "linestore.ls")]
    path: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let log = LogFile::open_or_create(&cli.path)
        .await
        .with_context(|| format!("opening log file {}", cli.path.display()))?;

    // An unreadable or corrupt log is fatal here, not at the first request.
    let records = log
        .read_all()
        .await
        .with_context(|| format!("reading log file {}", cli.path.display()))?;
    info!(records = records.len(), path = %cli.path.display(), "Log ready");

    let app = router(AppState::new(log));

    let listener = TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("binding {}", cli.listen))?;
    info!(addr = %cli.listen, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves once the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        // Without a signal handler the server just runs until killed.
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
