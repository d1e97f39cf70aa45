//! Tests for the MCP server surface.

mod mocks;

use contact_book::services::{ContactService, ContactServiceImpl};
use contact_book::ContactBookMcpServer;
use mocks::MockContactStore;
use rmcp::ServerHandler;
use std::sync::Arc;

fn setup_server() -> ContactBookMcpServer {
    let store = Arc::new(MockContactStore::new());
    let service = Arc::new(ContactServiceImpl::load(store)) as Arc<dyn ContactService>;
    ContactBookMcpServer::new(service)
}

#[test]
fn test_server_info() {
    let info = setup_server().get_info();

    assert_eq!(info.server_info.name, "contact-book");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    assert!(info.capabilities.tools.is_some());
    assert!(info
        .instructions
        .as_deref()
        .unwrap_or_default()
        .contains("Contact book"));
}
