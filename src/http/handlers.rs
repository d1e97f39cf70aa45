//! Route handlers for the REST API.
//!
//! Success bodies mirror the stored record layout. Failures carry
//! `{"success": false, "error": ...}` with a status derived from the error kind.

use crate::error::{ContactError, ServiceError};
use crate::models::{ContactRecord, ContactUpdate, NewContact};
use crate::services::ContactService;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

type SharedService = Arc<dyn ContactService>;
type ApiResponse = (StatusCode, Json<Value>);

/// Build the API router around a shared service.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/contacts", get(list_contacts).post(add_contact))
        .route(
            "/api/contacts/:contact_id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Map a service failure onto an HTTP status and error body.
fn error_response(err: &ServiceError) -> ApiResponse {
    let status = match err {
        ServiceError::Contact(ContactError::NotFound(_)) => StatusCode::NOT_FOUND,
        ServiceError::Contact(_) => StatusCode::BAD_REQUEST,
        ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(json!({ "success": false, "error": err.to_string() })),
    )
}

/// Wrap a body extraction failure in the same error envelope.
fn rejection_response(rejection: JsonRejection) -> ApiResponse {
    (
        rejection.status(),
        Json(json!({ "success": false, "error": rejection.body_text() })),
    )
}

async fn healthz(State(service): State<SharedService>) -> ApiResponse {
    let count = service.contact_count().await;
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "contacts": count })),
    )
}

async fn list_contacts(
    State(service): State<SharedService>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<ContactRecord>> {
    let contacts = service.search_contacts(&query.q).await;
    Json(contacts.iter().map(ContactRecord::from).collect())
}

async fn get_contact(
    State(service): State<SharedService>,
    Path(contact_id): Path<String>,
) -> ApiResponse {
    match service.get_contact(&contact_id).await {
        Some(contact) => (StatusCode::OK, Json(json!(contact.to_structured()))),
        None => error_response(&ContactError::NotFound(contact_id).into()),
    }
}

async fn add_contact(
    State(service): State<SharedService>,
    payload: Result<Json<NewContact>, JsonRejection>,
) -> ApiResponse {
    let Json(new_contact) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    match service.add_contact(new_contact).await {
        Ok(contact) => (
            StatusCode::OK,
            Json(json!({ "success": true, "contact": contact.to_structured() })),
        ),
        Err(e) => error_response(&e),
    }
}

async fn update_contact(
    State(service): State<SharedService>,
    Path(contact_id): Path<String>,
    payload: Result<Json<ContactUpdate>, JsonRejection>,
) -> ApiResponse {
    let Json(update) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    match service.update_contact(&contact_id, update).await {
        Ok(contact) => (
            StatusCode::OK,
            Json(json!({ "success": true, "contact": contact.to_structured() })),
        ),
        Err(e) => error_response(&e),
    }
}

async fn delete_contact(
    State(service): State<SharedService>,
    Path(contact_id): Path<String>,
) -> ApiResponse {
    match service.delete_contact(&contact_id).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "success": true }))),
        Err(e) => error_response(&e),
    }
}
