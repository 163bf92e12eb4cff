//! Integration tests for the Pinecone handshake and query path.
//!
//! A local axum server stands in for the controller and index hosts.
//!
//! Run with: `cargo test --package appkit-ai --test pinecone_handshake`

use std::net::SocketAddr;

use appkit_ai::{AiError, PineconeClient, PineconeConfig};
use axum::{
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

const GOOD_KEY: &str = "test-key";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("api-key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == GOOD_KEY)
}

async fn whoami(headers: HeaderMap) -> Result<Json<Value>, (StatusCode, String)> {
    if !authorized(&headers) {
        return Err((StatusCode::UNAUTHORIZED, "invalid api key".to_string()));
    }
    Ok(Json(json!({
        "project_name": "abc123",
        "user_label": "default",
        "user_name": "tester"
    })))
}

async fn databases(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!(["docs", "images"])))
}

async fn query(headers: HeaderMap, Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let top_k = body["topK"].as_u64().unwrap_or(0) as usize;
    let matches: Vec<Value> = [
        json!({ "id": "a", "score": 0.98, "metadata": { "title": "first" } }),
        json!({ "id": "b", "score": 0.75 }),
        json!({ "id": "c", "score": 0.40, "metadata": { "title": "third" } }),
    ]
    .into_iter()
    .take(top_k)
    .collect();
    Ok(Json(json!({ "matches": matches, "namespace": "" })))
}

/// Start the fake service and return its base URL.
async fn spawn_fake_pinecone() -> String {
    let app = Router::new()
        .route("/actions/whoami", get(whoami))
        .route("/databases", get(databases))
        .route("/query", post(query));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn init_resolves_project_name() {
    let base = spawn_fake_pinecone().await;
    let config = PineconeConfig::new(GOOD_KEY, "us-west1-gcp").with_controller_url(&base);

    let client = PineconeClient::init(config).await.unwrap();

    assert_eq!(client.project_name(), "abc123");
    assert_eq!(client.environment(), "us-west1-gcp");
    assert_eq!(client.whoami().user_name, "tester");
}

#[tokio::test]
async fn init_failure_propagates_status() {
    let base = spawn_fake_pinecone().await;
    let config = PineconeConfig::new("wrong", "us-west1-gcp").with_controller_url(&base);

    let err = PineconeClient::init(config).await.unwrap_err();

    match err {
        AiError::Api {
            service,
            status,
            message,
        } => {
            assert_eq!(service, "Pinecone");
            assert_eq!(status, 401);
            assert_eq!(message, "invalid api key");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn init_failure_on_unreachable_controller() {
    let config =
        PineconeConfig::new(GOOD_KEY, "nowhere").with_controller_url("http://127.0.0.1:1");

    let err = PineconeClient::init(config).await.unwrap_err();

    assert!(matches!(err, AiError::Http(_)));
}

#[tokio::test]
async fn index_host_is_derived_from_project() {
    let base = spawn_fake_pinecone().await;
    let config = PineconeConfig::new(GOOD_KEY, "us-west1-gcp").with_controller_url(&base);
    let client = PineconeClient::init(config).await.unwrap();

    let index = client.index("docs");

    assert_eq!(index.name(), "docs");
    assert_eq!(index.host(), "https://docs-abc123.svc.us-west1-gcp.pinecone.io");
}

#[tokio::test]
async fn lists_indexes() {
    let base = spawn_fake_pinecone().await;
    let config = PineconeConfig::new(GOOD_KEY, "us-west1-gcp").with_controller_url(&base);
    let client = PineconeClient::init(config).await.unwrap();

    assert_eq!(client.list_indexes().await.unwrap(), vec!["docs", "images"]);
}

#[tokio::test]
async fn query_returns_search_results() {
    let base = spawn_fake_pinecone().await;
    let config = PineconeConfig::new(GOOD_KEY, "us-west1-gcp").with_controller_url(&base);
    let client = PineconeClient::init(config).await.unwrap();
    let index = client.index("docs").with_host(&base);

    let results = index.query(&[0.1, 0.2, 0.3], 2).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "a");
    assert_eq!(results[0].metadata["title"], "first");
    assert_eq!(results[1].id, "b");
    assert!(results[1].metadata.is_empty());
}
