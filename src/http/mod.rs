//! HTTP adapter for the contact book.
//!
//! Exposes the contact service as a small JSON REST API built on axum.

pub mod handlers;

pub use handlers::router;

use crate::services::ContactService;
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Bind `addr` and serve the REST API until Ctrl-C.
pub async fn run_http_server(service: Arc<dyn ContactService>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Cannot listen for Ctrl-C, serving until killed: {}", e);
            std::future::pending::<()>().await
        }
    }
}
