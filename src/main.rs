//! Contact Book - Main entry point
//!
//! Loads the contacts file, builds the shared contact service once, and hands
//! it to the configured presentation adapter (HTTP or MCP over stdio).

use anyhow::Result;
use contact_book::http::run_http_server;
use contact_book::logging::init_logging;
use contact_book::repositories::{ContactStore, JsonFileStore};
use contact_book::services::{ContactService, ContactServiceImpl};
use contact_book::{Config, ContactBookMcpServer, Transport};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    init_logging(&config)?;
    info!("Starting Contact Book application");

    let store = Arc::new(JsonFileStore::new(config.contacts_file.clone())) as Arc<dyn ContactStore>;
    let service = Arc::new(ContactServiceImpl::load(store)) as Arc<dyn ContactService>;

    let result = match config.transport {
        Transport::Http => run_http_server(service, config.http_bind).await,
        Transport::Stdio => {
            info!("Starting MCP server with stdio transport");
            contact_book::server::run_server(ContactBookMcpServer::new(service)).await
        }
    };

    if let Err(e) = &result {
        error!("Application error: {:#}", e);
    }
    info!("Contact Book shutdown complete");
    result
}
