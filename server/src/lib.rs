//! HTTP API for the todo item store.
//!
//! | Method | Path              | Success                    |
//! |--------|-------------------|----------------------------|
//! | GET    | `/api/todos`      | 200, all items             |
//! | POST   | `/api/todos`      | 201, created item          |
//! | PUT    | `/api/todos/{id}` | 200, replaced item         |
//! | DELETE | `/api/todos/{id}` | 200, delete confirmation   |
//!
//! Failures carry an `ErrorBody` with the status chosen by [`ApiError`].

mod config;
mod error;
mod handlers;

pub use config::{ServerArgs, DEFAULT_DATABASE_URL};
pub use error::ApiError;

use axum::routing::{get, put};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use todo_store::ItemStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared handler state. The store is the only thing requests share.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
}

/// Build the HTTP API router over the given store.
pub fn build_router(store: Arc<dyn ItemStore>) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/{id}",
            put(handlers::replace_todo).delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { store })
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    store: Arc<dyn ItemStore>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(store))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received, draining connections");
}
