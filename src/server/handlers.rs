//! MCP tool handlers for the contact book.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::{ContactError, ServiceError};
use crate::models::{Contact, ContactRecord, ContactUpdate, NewContact};
use crate::services::ContactService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes the contact book as tools.
#[derive(Clone)]
pub struct ContactBookMcpServer {
    contact_service: Arc<dyn ContactService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactBookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-book".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact book - list, search, add, update and delete contacts (name, phone, email, address).".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContactsParams {
    /// Case-insensitive text matched against name, phone, email and address
    #[serde(default)]
    query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    contact_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateContactToolParams {
    contact_id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    address: Option<String>,
}

/// Convert a service error into an MCP error with a matching code.
fn to_mcp_error(e: ServiceError) -> McpError {
    let code = match &e {
        ServiceError::Contact(ContactError::NotFound(_)) => ErrorCode::RESOURCE_NOT_FOUND,
        ServiceError::Contact(_) => ErrorCode::INVALID_PARAMS,
        ServiceError::Storage(_) => ErrorCode::INTERNAL_ERROR,
    };
    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn internal_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Render a value as pretty JSON text content.
fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(internal_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn records(contacts: &[Contact]) -> Vec<ContactRecord> {
    contacts.iter().map(ContactRecord::from).collect()
}

// Tool router implementation
#[tool_router]
impl ContactBookMcpServer {
    /// Create a new MCP server over a shared contact service.
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self {
            contact_service,
            tool_router: Self::tool_router(),
        }
    }

    /// List every contact in display order.
    #[tool(description = "List every contact in the contact book, in display order")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let contacts = self.contact_service.list_contacts().await;
        json_result(&records(&contacts))
    }

    /// Search contacts by substring across all fields.
    #[tool(
        description = "Search contacts by case-insensitive substring across name, phone, email and address. An empty query returns every contact."
    )]
    async fn search_contacts(
        &self,
        params: Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let contacts = self.contact_service.search_contacts(&params.query).await;

        json_result(&serde_json::json!({
            "query": params.query,
            "result_count": contacts.len(),
            "results": records(&contacts),
        }))
    }

    /// Retrieve a single contact by ID.
    #[tool(description = "Retrieve a single contact by ID")]
    async fn get_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let contact_id = params.0.contact_id;
        match self.contact_service.get_contact(&contact_id).await {
            Some(contact) => json_result(&contact.to_structured()),
            None => Err(to_mcp_error(ContactError::NotFound(contact_id).into())),
        }
    }

    /// Add a new contact. Name is required.
    #[tool(
        description = "Add a new contact. Name is required; phone, email and address are optional. Returns the stored contact with its generated contact_id."
    )]
    async fn add_contact(
        &self,
        params: Parameters<NewContact>,
    ) -> Result<CallToolResult, McpError> {
        let contact = self
            .contact_service
            .add_contact(params.0)
            .await
            .map_err(to_mcp_error)?;

        json_result(&contact.to_structured())
    }

    /// Update some fields of an existing contact.
    #[tool(
        description = "Update an existing contact. Only the fields provided are changed; the name cannot be cleared."
    )]
    async fn update_contact(
        &self,
        params: Parameters<UpdateContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let update = ContactUpdate {
            name: params.name,
            phone: params.phone,
            email: params.email,
            address: params.address,
        };

        let contact = self
            .contact_service
            .update_contact(&params.contact_id, update)
            .await
            .map_err(to_mcp_error)?;

        json_result(&contact.to_structured())
    }

    /// Delete a contact by ID.
    #[tool(description = "Delete a contact by ID")]
    async fn delete_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let removed = self
            .contact_service
            .delete_contact(&params.0.contact_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "deleted": true,
            "contact": removed.to_structured(),
        }))
    }
}
