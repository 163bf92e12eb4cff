//! Integration tests for the appkit CLI.
//!
//! Run with: `cargo test --package appkit-cli --test cli_integration`

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const SERVICE_KEYS: &[&str] = &[
    "OPENAI_API_KEY",
    "OPENAI_API_URL",
    "PINECONE_API_KEY",
    "PINECONE_ENVIRONMENT",
    "SUPABASE_URL",
    "SUPABASE_KEY",
    "MONGODB_URI",
    "NEO4J_URI",
    "NEO4J_USER",
    "NEO4J_PASSWORD",
    "REDIS_URL",
];

/// Run appkit in an empty directory with no service variables set.
fn run_appkit(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_appkit"));
    cmd.current_dir(dir).args(args);
    for key in SERVICE_KEYS {
        cmd.env_remove(key);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute appkit command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_email_valid_and_invalid() {
    let temp = TempDir::new().unwrap();

    let ok = run_appkit(temp.path(), &["email", "user@example.com"], &[]);
    assert!(ok.status.success());
    assert_eq!(stdout_json(&ok), serde_json::json!({ "isValid": true }));

    let bad = run_appkit(temp.path(), &["email", "nope"], &[]);
    assert!(bad.status.success());
    assert_eq!(
        stdout_json(&bad),
        serde_json::json!({ "isValid": false, "errors": ["Invalid email"] })
    );
}

#[test]
fn test_required_zero_keeps_inconsistent_result() {
    let temp = TempDir::new().unwrap();

    let output = run_appkit(temp.path(), &["required", "0"], &[]);

    assert_eq!(
        stdout_json(&output),
        serde_json::json!({ "isValid": true, "errors": ["This field is required"] })
    );
}

#[test]
fn test_required_missing_value() {
    let temp = TempDir::new().unwrap();

    let output = run_appkit(temp.path(), &["required"], &[]);

    assert_eq!(stdout_json(&output)["isValid"], false);
}

#[test]
fn test_format_text_number_and_date() {
    let temp = TempDir::new().unwrap();

    let text = run_appkit(
        temp.path(),
        &["format", "text", "hello world", "--truncate", "5"],
        &[],
    );
    assert_eq!(stdout(&text), "hello...");

    let both = run_appkit(
        temp.path(),
        &["format", "text", "Hello", "--lowercase", "--uppercase"],
        &[],
    );
    assert_eq!(stdout(&both), "HELLO");

    let number = run_appkit(temp.path(), &["format", "number", "3.14159"], &[]);
    assert_eq!(stdout(&number), "3.14");

    let negative = run_appkit(
        temp.path(),
        &["format", "number", "-2", "--decimals", "1"],
        &[],
    );
    assert_eq!(stdout(&negative), "-2.0");

    let date = run_appkit(
        temp.path(),
        &["format", "date", "2024-01-15T15:30:00", "--time"],
        &[],
    );
    assert_eq!(stdout(&date), "January 15th, 2024 3:30 PM");
}

#[test]
fn test_format_date_rejects_garbage() {
    let temp = TempDir::new().unwrap();

    let output = run_appkit(temp.path(), &["format", "date", "someday"], &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid time value"));
}

#[test]
fn test_validate_user_file() {
    let temp = TempDir::new().unwrap();
    let good = temp.path().join("good.json");
    fs::write(
        &good,
        r#"{ "id": "u1", "email": "owner@example.com", "role": "OWNER" }"#,
    )
    .unwrap();
    let bad = temp.path().join("bad.json");
    fs::write(&bad, r#"{ "id": "u1", "email": "owner@example.com", "role": "ADMIN" }"#).unwrap();

    let ok = run_appkit(temp.path(), &["validate", "user", "good.json"], &[]);
    assert!(ok.status.success());
    let ok_json = stdout_json(&ok);
    assert_eq!(ok_json["success"], true);
    assert_eq!(ok_json["data"]["role"], "OWNER");

    let failed = run_appkit(temp.path(), &["validate", "user", "bad.json"], &[]);
    assert!(!failed.status.success());
    let failed_json = stdout_json(&failed);
    assert_eq!(failed_json["success"], false);
    assert_eq!(failed_json["issues"][0]["path"], "role");
}

#[test]
fn test_validate_event_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("event.json");
    fs::write(
        &path,
        r#"{
            "id": "e1",
            "type": "signup",
            "timestamp": "2024-01-15T10:30:00Z",
            "data": { "plan": "pro", "seats": 3 },
            "userId": "u1"
        }"#,
    )
    .unwrap();

    let output = run_appkit(temp.path(), &["validate", "event", "event.json"], &[]);

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["data"]["data"]["seats"], 3);
}

#[test]
fn test_schema_output() {
    let temp = TempDir::new().unwrap();

    let output = run_appkit(temp.path(), &["schema", "analysis"], &[]);

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["title"], "AIAnalysis");
}

#[test]
fn test_connect_requires_configuration() {
    let temp = TempDir::new().unwrap();

    let output = run_appkit(temp.path(), &["connect", "openai"], &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("OPENAI_API_KEY is not set"));
}

#[test]
fn test_connect_builds_lazy_clients() {
    let temp = TempDir::new().unwrap();

    let redis = run_appkit(
        temp.path(),
        &["connect", "redis"],
        &[("REDIS_URL", "redis://127.0.0.1:6390")],
    );
    assert!(redis.status.success());
    assert_eq!(stdout(&redis), "Redis client ready");

    let supabase = run_appkit(
        temp.path(),
        &["connect", "supabase"],
        &[("SUPABASE_URL", "https://xyz.supabase.co"), ("SUPABASE_KEY", "anon")],
    );
    assert!(supabase.status.success());
    assert_eq!(
        stdout(&supabase),
        "Supabase client ready (https://xyz.supabase.co/rest/v1)"
    );
}

#[test]
fn test_connect_reads_dotenv() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env"), "OPENAI_API_KEY=sk-from-dotenv\n").unwrap();

    let output = run_appkit(temp.path(), &["connect", "openai"], &[]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "OpenAI client ready (https://api.openai.com/v1)"
    );
}

#[test]
fn test_config_masks_secrets() {
    let temp = TempDir::new().unwrap();

    let output = run_appkit(
        temp.path(),
        &["config"],
        &[("OPENAI_API_KEY", "sk-very-secret"), ("NEO4J_USER", "neo4j")],
    );

    let text = stdout(&output);
    assert!(output.status.success());
    assert!(!text.contains("sk-very-secret"));
    assert!(text.contains("OPENAI_API_KEY"));
    assert!(text.contains("***"));
    assert!(text.contains("neo4j"));
}
