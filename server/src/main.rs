//! Todo item store server.
//!
//! Serves the item API over HTTP, backed by the store named in
//! `--database-url`.
//!
//! Usage:
//!   todo-server --port 5000 --database-url duckdb://todos.duckdb

use anyhow::{Context, Result};
use clap::Parser;
use todo_server::{serve, shutdown_signal, ServerArgs};
use todo_store::open_store;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Todo server starting...");
    let url = args.store_url().context("Invalid database url")?;
    let store = open_store(&url).with_context(|| format!("Failed to open store at {url}"))?;
    info!("Using {} store at {}", store.backend_name(), url);

    let addr = args.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP port on {addr}"))?;
    info!("Server running on {}", listener.local_addr()?);

    serve(listener, store, shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}
