//! Integration tests for the OpenAI-compatible completion client.

use appkit_ai::{create_openai_client, AiError, ChatMessage};
use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

async fn completions(
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if auth != "Bearer sk-test" {
        return Err((StatusCode::UNAUTHORIZED, "Incorrect API key provided".to_string()));
    }

    let last = body["messages"]
        .as_array()
        .and_then(|m| m.last())
        .and_then(|m| m["content"].as_str())
        .unwrap_or_default()
        .to_string();
    if body["model"] == "empty" {
        return Ok(Json(json!({ "choices": [] })));
    }

    Ok(Json(json!({
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": format!("echo: {last}") } }
        ]
    })))
}

async fn spawn_fake_openai() -> String {
    let app = Router::new().route("/v1/chat/completions", post(completions));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1")
}

#[tokio::test]
async fn returns_first_choice_content() {
    let base = spawn_fake_openai().await;
    let client = create_openai_client("sk-test").with_base_url(base);

    let reply = client
        .chat_completion(
            "gpt-4o-mini",
            &[ChatMessage::system("be brief"), ChatMessage::user("hello")],
        )
        .await
        .unwrap();

    assert_eq!(reply, "echo: hello");
}

#[tokio::test]
async fn bad_key_surfaces_on_first_use() {
    let base = spawn_fake_openai().await;
    let client = create_openai_client("sk-wrong").with_base_url(base);

    let err = client
        .chat_completion("gpt-4o-mini", &[ChatMessage::user("hello")])
        .await
        .unwrap_err();

    assert!(matches!(err, AiError::Api { status: 401, .. }));
}

#[tokio::test]
async fn empty_choices_are_malformed() {
    let base = spawn_fake_openai().await;
    let client = create_openai_client("sk-test").with_base_url(base);

    let err = client
        .chat_completion("empty", &[ChatMessage::user("hello")])
        .await
        .unwrap_err();

    assert!(matches!(err, AiError::MalformedResponse { .. }));
}
