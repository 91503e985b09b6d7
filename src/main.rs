//! todo-server - in-memory Todo REST API with static file serving

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use todo_server::config::ServerConfig;
use todo_server::handlers::{build_app, TodoController};
use todo_server::{metrics, tracing_setup};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_setup::init_tracing()?;

    metrics::register_metrics().context("Failed to register metrics")?;

    info!("Starting todo server...");

    let server_config = ServerConfig::from_env();
    server_config.log();

    let controller = Arc::new(TodoController::new(server_config.clone()));
    let app = build_app(controller);

    let addr = server_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received, starting graceful shutdown");
}
