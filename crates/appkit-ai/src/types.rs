//! Record shapes produced and consumed by the AI packages.

use appkit_utils::{FieldChecker, Issue, Schema};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of running text through an analysis model.
///
/// The sentiment range is left to the producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "AIAnalysis")]
pub struct AiAnalysis {
    pub text: String,
    pub sentiment: f64,
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Schema for AiAnalysis {
    const NAME: &'static str = "AIAnalysis";

    fn check(fields: &Map<String, Value>) -> Vec<Issue> {
        FieldChecker::new(fields)
            .string("text")
            .number("sentiment")
            .string_array("topics")
            .optional_string("summary")
            .finish()
    }
}

/// A single match returned by a vector similarity query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VectorSearchResult {
    pub id: String,
    pub score: f64,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}
