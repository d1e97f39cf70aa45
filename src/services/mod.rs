//! Application service layer.
//!
//! Services contain business logic and sit between the presentation adapters
//! (HTTP and MCP) and the collection plus its store.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};
