//! Environment-driven configuration for the AI clients.

use serde::{Deserialize, Serialize};

use crate::error::{AiError, AiResult};

/// Credentials and endpoints for the AI services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(skip_serializing)]
    pub openai_api_key: Option<String>,

    /// Alternative OpenAI-compatible base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_url: Option<String>,

    #[serde(skip_serializing)]
    pub pinecone_api_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinecone_environment: Option<String>,
}

impl AiConfig {
    /// Read configuration from the process environment, loading `.env` first.
    pub fn from_env() -> Self {
        // Missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            openai_api_key: read("OPENAI_API_KEY"),
            openai_api_url: read("OPENAI_API_URL"),
            pinecone_api_key: read("PINECONE_API_KEY"),
            pinecone_environment: read("PINECONE_ENVIRONMENT"),
        }
    }

    pub fn require_openai_key(&self) -> AiResult<&str> {
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| AiError::Config("OPENAI_API_KEY is not set".to_string()))
    }

    /// Pinecone API key and environment, both required.
    pub fn require_pinecone(&self) -> AiResult<(&str, &str)> {
        let key = self
            .pinecone_api_key
            .as_deref()
            .ok_or_else(|| AiError::Config("PINECONE_API_KEY is not set".to_string()))?;
        let environment = self
            .pinecone_environment
            .as_deref()
            .ok_or_else(|| AiError::Config("PINECONE_ENVIRONMENT is not set".to_string()))?;
        Ok((key, environment))
    }

    /// Look up a value by environment key, masking secrets.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "OPENAI_API_KEY" => self.openai_api_key.as_ref().map(|_| "***".to_string()),
            "OPENAI_API_URL" => self.openai_api_url.clone(),
            "PINECONE_API_KEY" => self.pinecone_api_key.as_ref().map(|_| "***".to_string()),
            "PINECONE_ENVIRONMENT" => self.pinecone_environment.clone(),
            _ => None,
        }
    }

    /// Every key this config understands.
    pub fn keys() -> &'static [&'static str] {
        &[
            "OPENAI_API_KEY",
            "OPENAI_API_URL",
            "PINECONE_API_KEY",
            "PINECONE_ENVIRONMENT",
        ]
    }
}
