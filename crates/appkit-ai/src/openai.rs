//! OpenAI-compatible completion client.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::{check_status, AiError, AiResult};

/// Base URL of the hosted OpenAI API.
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

const SERVICE: &str = "OpenAI";

/// Build a client bound to `api_key`.
///
/// The key is not checked here; a bad key only surfaces when a request is made.
pub fn create_openai_client(api_key: impl Into<String>) -> OpenAiClient {
    OpenAiClient::new(api_key)
}

/// Handle to an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// One message in a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_OPENAI_API_URL.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Point the client at another OpenAI-compatible server (Ollama, vLLM, ...).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Send `messages` to `model` and return the first choice's content.
    pub async fn chat_completion(&self, model: &str, messages: &[ChatMessage]) -> AiResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(model, message_count = messages.len(), "openai_chat_completion");

        let response = self
            .http
            .post(url)
            .headers(self.auth_headers()?)
            .json(&json!({ "model": model, "messages": messages }))
            .send()
            .await?;
        let response = check_status(SERVICE, response).await?;

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AiError::malformed(SERVICE, "response contained no choices"))
    }

    fn auth_headers(&self) -> AiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        if !self.api_key.is_empty() {
            let value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| AiError::Config("API key is not a valid header value".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}
