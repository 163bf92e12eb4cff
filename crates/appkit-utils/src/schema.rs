//! Structural validation for records arriving as untyped JSON.
//!
//! A record type implements [`Schema`] by listing its field rules in
//! [`Schema::check`] with a [`FieldChecker`]. [`Schema::parse`] runs every
//! rule, collects all issues, and only deserializes the typed value when
//! none were found. Unknown keys are ignored.

use std::sync::OnceLock;

use chrono::DateTime;
use regex::Regex;
use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::validation::{is_email, INVALID_EMAIL_MESSAGE};

const REQUIRED: &str = "Required";
const INVALID_DATETIME: &str = "Invalid datetime";

static DATETIME_RE: OnceLock<Regex> = OnceLock::new();

fn datetime_regex() -> &'static Regex {
    DATETIME_RE.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?Z$")
            .expect("datetime pattern is a valid regex")
    })
}

/// A single violation found while checking a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Dotted path to the offending field; empty for the record itself.
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Tagged outcome of [`Schema::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaResult<T> {
    Success(T),
    Failure(Vec<Issue>),
}

impl<T> SchemaResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, SchemaResult::Success(_))
    }

    /// The typed value, if validation passed.
    pub fn ok(self) -> Option<T> {
        match self {
            SchemaResult::Success(value) => Some(value),
            SchemaResult::Failure(_) => None,
        }
    }

    /// Issues found; empty on success.
    pub fn issues(&self) -> &[Issue] {
        match self {
            SchemaResult::Success(_) => &[],
            SchemaResult::Failure(issues) => issues,
        }
    }

    pub fn into_result(self) -> Result<T, Vec<Issue>> {
        match self {
            SchemaResult::Success(value) => Ok(value),
            SchemaResult::Failure(issues) => Err(issues),
        }
    }
}

impl<T: Serialize> SchemaResult<T> {
    /// `{"success": true, "data": ..}` or `{"success": false, "issues": [..]}`.
    ///
    /// Fails only when the parsed value itself cannot be represented as JSON.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        Ok(match self {
            SchemaResult::Success(value) => json!({
                "success": true,
                "data": serde_json::to_value(value)?,
            }),
            SchemaResult::Failure(issues) => json!({
                "success": false,
                "issues": issues,
            }),
        })
    }
}

/// A record shape that can be validated from untyped JSON.
pub trait Schema: DeserializeOwned + JsonSchema + Sized {
    /// Human-readable record name.
    const NAME: &'static str;

    /// Run every field rule against `fields`, returning all violations.
    fn check(fields: &Map<String, Value>) -> Vec<Issue>;

    /// Validate `input` and, if it conforms, deserialize the typed record.
    fn parse(input: &Value) -> SchemaResult<Self> {
        let Some(fields) = input.as_object() else {
            return SchemaResult::Failure(vec![Issue::new(
                "",
                format!("Expected object, received {}", kind_of(input)),
            )]);
        };

        let issues = Self::check(fields);
        if !issues.is_empty() {
            return SchemaResult::Failure(issues);
        }

        match serde_json::from_value(input.clone()) {
            Ok(value) => SchemaResult::Success(value),
            Err(err) => SchemaResult::Failure(vec![Issue::new("", err.to_string())]),
        }
    }

    /// JSON Schema describing the record.
    fn json_schema() -> RootSchema {
        schema_for!(Self)
    }
}

/// Accumulates issues while walking the fields of one record.
pub struct FieldChecker<'a> {
    fields: &'a Map<String, Value>,
    issues: Vec<Issue>,
}

impl<'a> FieldChecker<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields,
            issues: Vec::new(),
        }
    }

    /// Required string.
    pub fn string(mut self, key: &str) -> Self {
        if let Some(value) = self.required(key) {
            self.expect_string(key, value);
        }
        self
    }

    /// String that may be absent. An explicit `null` is still a type error.
    pub fn optional_string(mut self, key: &str) -> Self {
        if let Some(value) = self.fields.get(key) {
            self.expect_string(key, value);
        }
        self
    }

    /// Required number.
    pub fn number(mut self, key: &str) -> Self {
        if let Some(value) = self.required(key) {
            if !value.is_number() {
                self.mismatch(key, "number", value);
            }
        }
        self
    }

    /// Required array whose every element is a string.
    pub fn string_array(mut self, key: &str) -> Self {
        let Some(value) = self.required(key) else {
            return self;
        };
        match value.as_array() {
            Some(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        self.mismatch(&format!("{key}.{idx}"), "string", item);
                    }
                }
            }
            None => self.mismatch(key, "array", value),
        }
        self
    }

    /// Required string drawn from a closed set of values.
    pub fn one_of(mut self, key: &str, allowed: &[&str]) -> Self {
        let Some(value) = self.required(key) else {
            return self;
        };
        match value.as_str() {
            Some(s) if allowed.contains(&s) => {}
            _ => {
                let expected = allowed
                    .iter()
                    .map(|a| format!("'{a}'"))
                    .collect::<Vec<_>>()
                    .join(" | ");
                let received = match value {
                    Value::String(s) => format!("'{s}'"),
                    other => other.to_string(),
                };
                self.issues.push(Issue::new(
                    key,
                    format!("Invalid enum value. Expected {expected}, received {received}"),
                ));
            }
        }
        self
    }

    /// Required string that must be a syntactically valid email.
    pub fn email(mut self, key: &str) -> Self {
        if let Some(value) = self.required(key) {
            if let Some(s) = self.expect_string(key, value) {
                if !is_email(s) {
                    self.issues.push(Issue::new(key, INVALID_EMAIL_MESSAGE));
                }
            }
        }
        self
    }

    /// Required UTC ISO-8601 datetime (`YYYY-MM-DDTHH:MM:SS[.f]Z`).
    pub fn datetime(mut self, key: &str) -> Self {
        if let Some(value) = self.required(key) {
            if let Some(s) = self.expect_string(key, value) {
                if !is_utc_datetime(s) {
                    self.issues.push(Issue::new(key, INVALID_DATETIME));
                }
            }
        }
        self
    }

    /// Required object with arbitrary keys and values.
    pub fn record(mut self, key: &str) -> Self {
        if let Some(value) = self.required(key) {
            if !value.is_object() {
                self.mismatch(key, "object", value);
            }
        }
        self
    }

    /// Object with arbitrary keys and values that may be absent.
    pub fn optional_record(mut self, key: &str) -> Self {
        if let Some(value) = self.fields.get(key) {
            if !value.is_object() {
                self.mismatch(key, "object", value);
            }
        }
        self
    }

    pub fn finish(self) -> Vec<Issue> {
        self.issues
    }

    fn required(&mut self, key: &str) -> Option<&'a Value> {
        let fields = self.fields;
        let value = fields.get(key);
        if value.is_none() {
            self.issues.push(Issue::new(key, REQUIRED));
        }
        value
    }

    fn expect_string<'v>(&mut self, key: &str, value: &'v Value) -> Option<&'v str> {
        let s = value.as_str();
        if s.is_none() {
            self.mismatch(key, "string", value);
        }
        s
    }

    fn mismatch(&mut self, path: &str, expected: &str, received: &Value) {
        self.issues.push(Issue::new(
            path,
            format!("Expected {expected}, received {}", kind_of(received)),
        ));
    }
}

/// Whether `value` is a UTC timestamp in `Z` form that names a real instant.
pub fn is_utc_datetime(value: &str) -> bool {
    datetime_regex().is_match(value) && DateTime::parse_from_rfc3339(value).is_ok()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
