//! Tests for the REST API.
//!
//! Each test serves the router on an ephemeral local port and talks to it
//! with a blocking HTTP client on a worker thread.

mod mocks;

use contact_book::http::router;
use contact_book::repositories::{ContactStore, JsonFileStore};
use contact_book::services::{ContactService, ContactServiceImpl};
use mocks::MockContactStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::tempdir;

/// Serve the API over `store` and return its base URL.
async fn spawn_app(store: Arc<dyn ContactStore>) -> String {
    let service = Arc::new(ContactServiceImpl::load(store)) as Arc<dyn ContactService>;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router(service)).await.expect("serve");
    });

    format!("http://{}", addr)
}

/// Collapse a ureq result into (status, JSON body), treating 4xx/5xx as data.
fn into_status_and_json(result: Result<ureq::Response, ureq::Error>) -> (u16, Value) {
    match result {
        Ok(resp) => (resp.status(), resp.into_json().expect("json body")),
        Err(ureq::Error::Status(code, resp)) => (code, resp.into_json().expect("json body")),
        Err(e) => panic!("transport error: {}", e),
    }
}

async fn request<F>(f: F) -> (u16, Value)
where
    F: FnOnce() -> Result<ureq::Response, ureq::Error> + Send + 'static,
{
    tokio::task::spawn_blocking(move || into_status_and_json(f()))
        .await
        .expect("request thread")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_search_update_delete_over_http() {
    let store = MockContactStore::new();
    let base = spawn_app(Arc::new(store.clone())).await;

    // Add
    let url = format!("{}/api/contacts", base);
    let (status, body) = request(move || {
        ureq::post(&url).send_json(json!({
            "name": "Ada",
            "phone": "555-1000",
            "email": "ada@x.com",
            "address": "1 Infinite Loop"
        }))
    })
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["contact"]["name"], json!("Ada"));
    let id = body["contact"]["contact_id"]
        .as_str()
        .expect("contact_id")
        .to_string();

    // Search
    let url = format!("{}/api/contacts", base);
    let (status, body) = request(move || ureq::get(&url).query("q", "ADA").call()).await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["contact_id"], json!(id));

    // Update
    let url = format!("{}/api/contacts/{}", base, id);
    let (status, body) =
        request(move || ureq::put(&url).send_json(json!({ "phone": "555-2000" }))).await;
    assert_eq!(status, 200);
    assert_eq!(body["contact"]["phone"], json!("555-2000"));
    assert_eq!(body["contact"]["email"], json!("ada@x.com"));
    assert_eq!(store.saved_records()[0].phone, "555-2000");

    // Get
    let url = format!("{}/api/contacts/{}", base, id);
    let (status, body) = request(move || ureq::get(&url).call()).await;
    assert_eq!(status, 200);
    assert_eq!(body["phone"], json!("555-2000"));

    // Delete
    let url = format!("{}/api/contacts/{}", base, id);
    let (status, body) = request(move || ureq::delete(&url).call()).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "success": true }));
    assert!(store.saved_records().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_without_name_is_bad_request() {
    let store = MockContactStore::new();
    let base = spawn_app(Arc::new(store.clone())).await;

    let url = format!("{}/api/contacts", base);
    let (status, body) =
        request(move || ureq::post(&url).send_json(json!({ "phone": "555" }))).await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("Name is required"));
    assert_eq!(store.get_call_count("save"), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bad_bodies_use_error_envelope() {
    let store = MockContactStore::new();
    let base = spawn_app(Arc::new(store.clone())).await;

    // Syntactically broken JSON
    let url = format!("{}/api/contacts", base);
    let (status, body) = request(move || {
        ureq::post(&url)
            .set("Content-Type", "application/json")
            .send_string("{\"name\": ")
    })
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());

    // Well-formed JSON with a mistyped field
    let url = format!("{}/api/contacts", base);
    let (status, body) =
        request(move || ureq::post(&url).send_json(json!({ "name": 7 }))).await;
    assert_eq!(status, 422);
    assert_eq!(body["success"], json!(false));

    // No JSON content type
    let url = format!("{}/api/contacts/missing", base);
    let (status, body) = request(move || ureq::put(&url).send_string("name=Bob")).await;
    assert_eq!(status, 415);
    assert_eq!(body["success"], json!(false));

    assert_eq!(store.get_call_count("save"), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_id_is_not_found() {
    let base = spawn_app(Arc::new(MockContactStore::new())).await;

    let url = format!("{}/api/contacts/missing", base);
    let (status, body) =
        request(move || ureq::put(&url).send_json(json!({ "name": "Bob" }))).await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], json!(false));

    let url = format!("{}/api/contacts/missing", base);
    let (status, _) = request(move || ureq::delete(&url).call()).await;
    assert_eq!(status, 404);

    let url = format!("{}/api/contacts/missing", base);
    let (status, _) = request(move || ureq::get(&url).call()).await;
    assert_eq!(status, 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_storage_failure_is_server_error() {
    let store = MockContactStore::new();
    store.set_fail_saves(true);
    let base = spawn_app(Arc::new(store)).await;

    let url = format!("{}/api/contacts", base);
    let (status, body) =
        request(move || ureq::post(&url).send_json(json!({ "name": "Ada" }))).await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], json!(false));

    let url = format!("{}/healthz", base);
    let (status, body) = request(move || ureq::get(&url).call()).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "status": "ok", "contacts": 1 }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_changes_survive_restart_with_file_store() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("contacts.json");

    let base = spawn_app(Arc::new(JsonFileStore::new(&path))).await;
    let url = format!("{}/api/contacts", base);
    let (status, _) = request(move || {
        ureq::post(&url).send_json(json!({ "name": "Grace Hopper", "email": "grace@navy.mil" }))
    })
    .await;
    assert_eq!(status, 200);

    // A fresh server over the same file sees the saved contact.
    let base = spawn_app(Arc::new(JsonFileStore::new(&path))).await;
    let url = format!("{}/api/contacts", base);
    let (status, body) = request(move || ureq::get(&url).call()).await;
    assert_eq!(status, 200);
    assert_eq!(body[0]["name"], json!("Grace Hopper"));
    assert_eq!(body[0]["email"], json!("grace@navy.mil"));
    assert_eq!(body[0]["phone"], json!(""));
}
