//! MCP server implementation for the contact book.
//!
//! This module provides the MCP protocol server that exposes the contact
//! book to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactBookMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// client disconnects.
pub async fn run_server(server: ContactBookMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
