//! Error types for the AI client factories.

use thiserror::Error;

/// Result type for AI client operations.
pub type AiResult<T> = Result<T, AiError>;

/// Errors surfaced by the AI clients.
#[derive(Debug, Error)]
pub enum AiError {
    /// Transport-level failure from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a non-success status.
    #[error("{service} API returned {status}: {message}")]
    Api {
        service: &'static str,
        status: u16,
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Malformed {service} response: {message}")]
    MalformedResponse {
        service: &'static str,
        message: String,
    },

    /// Required configuration is missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AiError {
    pub(crate) fn malformed(service: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            service,
            message: message.into(),
        }
    }
}

/// Turn a non-success response into [`AiError::Api`], keeping the body text.
pub(crate) async fn check_status(
    service: &'static str,
    response: reqwest::Response,
) -> AiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(AiError::Api {
        service,
        status: status.as_u16(),
        message,
    })
}
