//! Domain records stored in the application databases.

use appkit_utils::{FieldChecker, Issue, Schema};
use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Access level of a [`User`]. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    Collaborator,
    Viewer,
}

impl Role {
    /// Wire names of every role, in declaration order.
    pub const NAMES: [&'static str; 3] = ["OWNER", "COLLABORATOR", "VIEWER"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "OWNER",
            Role::Collaborator => "COLLABORATOR",
            Role::Viewer => "VIEWER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
}

impl Schema for User {
    const NAME: &'static str = "User";

    fn check(fields: &Map<String, Value>) -> Vec<Issue> {
        FieldChecker::new(fields)
            .string("id")
            .email("email")
            .optional_string("name")
            .one_of("role", &Role::NAMES)
            .finish()
    }
}

/// Something that happened on behalf of a user.
///
/// `data` and `metadata` accept any keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    /// UTC ISO-8601 timestamp, e.g. `2024-01-15T10:30:00Z`.
    pub timestamp: String,
    pub data: Map<String, Value>,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl Event {
    /// The timestamp as a `chrono` value. Always succeeds for parsed events.
    pub fn parsed_timestamp(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.timestamp)
    }
}

impl Schema for Event {
    const NAME: &'static str = "Event";

    fn check(fields: &Map<String, Value>) -> Vec<Issue> {
        FieldChecker::new(fields)
            .string("id")
            .string("type")
            .datetime("timestamp")
            .record("data")
            .string("userId")
            .optional_record("metadata")
            .finish()
    }
}
