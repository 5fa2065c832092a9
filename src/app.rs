pub mod api;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::catalogue::Catalogue;
use crate::environment::Config;
use api::{router, AppState};

/// Main application loop, setting up and running the Axum-based API server.
pub async fn app_api_loop(config: &Config, catalogue: Catalogue) -> Result<()> {
    let topics = catalogue.len();
    let app = router(AppState::new(catalogue), &config.cors_origins);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server running on http://{} with {} topics", addr, topics);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_err() {
        error!("Failed to listen for ctrl-c");
        // Keep serving; there is no other shutdown trigger.
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received, shutting down.");
}
