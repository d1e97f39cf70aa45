//! Contact Book - a single-user contact manager.
//!
//! Contacts (name, phone, email, address) live in an ordered in-memory
//! collection that is saved to a JSON file after every change. The collection
//! is served over a REST API or as MCP tools.
//!
//! # Architecture
//!
//! - **domain**: Value objects (contact IDs) and validation errors
//! - **models**: The contact record, its structured form, and update types
//! - **collection**: Ordered CRUD and search over contacts
//! - **repositories**: Persistence behind the `ContactStore` trait
//! - **services**: Shared owner of the collection; saves after each mutation
//! - **http**: axum REST adapter
//! - **server**: rmcp MCP adapter
//! - **config** / **logging** / **error**: ambient setup

pub mod collection;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use collection::ContactCollection;
pub use config::{Config, Transport};
pub use error::{ConfigError, ContactError, ServiceError, StorageError};
pub use models::{Contact, ContactRecord, ContactUpdate, NewContact};
pub use repositories::{ContactStore, JsonFileStore};
pub use server::ContactBookMcpServer;
pub use services::{ContactService, ContactServiceImpl};
