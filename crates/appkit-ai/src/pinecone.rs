//! Pinecone vector database client.
//!
//! Construction is asynchronous: [`create_pinecone_client`] calls the
//! environment's controller `whoami` endpoint to resolve the project name
//! before handing back a client. Index data-plane hosts are derived from
//! that project name.

use std::fmt;

use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::{check_status, AiError, AiResult};
use crate::types::VectorSearchResult;

const SERVICE: &str = "Pinecone";
const API_KEY_HEADER: &str = "Api-Key";

/// Connection parameters for [`PineconeClient::init`].
#[derive(Clone)]
pub struct PineconeConfig {
    pub api_key: String,
    pub environment: String,
    /// Overrides `https://controller.{environment}.pinecone.io`.
    pub controller_url: Option<String>,
}

impl fmt::Debug for PineconeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PineconeConfig")
            .field("api_key", &"***")
            .field("environment", &self.environment)
            .field("controller_url", &self.controller_url)
            .finish()
    }
}

impl PineconeConfig {
    pub fn new(api_key: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            environment: environment.into(),
            controller_url: None,
        }
    }

    #[must_use]
    pub fn with_controller_url(mut self, url: impl Into<String>) -> Self {
        self.controller_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    fn controller(&self) -> String {
        self.controller_url
            .clone()
            .unwrap_or_else(|| format!("https://controller.{}.pinecone.io", self.environment))
    }
}

/// Identity returned by the controller handshake.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Whoami {
    pub project_name: String,
    #[serde(default)]
    pub user_label: String,
    #[serde(default)]
    pub user_name: String,
}

/// Initialized Pinecone client.
#[derive(Debug, Clone)]
pub struct PineconeClient {
    config: PineconeConfig,
    whoami: Whoami,
    http: reqwest::Client,
}

/// Create a client for `environment` and wait for the handshake to finish.
///
/// Handshake failures (bad key, unreachable controller) are returned as-is.
pub async fn create_pinecone_client(
    api_key: impl Into<String>,
    environment: impl Into<String>,
) -> AiResult<PineconeClient> {
    PineconeClient::init(PineconeConfig::new(api_key, environment)).await
}

impl PineconeClient {
    /// Run the controller handshake and return a ready client.
    pub async fn init(config: PineconeConfig) -> AiResult<Self> {
        let http = reqwest::Client::new();
        let url = format!("{}/actions/whoami", config.controller());
        debug!(environment = %config.environment, "pinecone_init_start");

        let response = http
            .get(url)
            .header(API_KEY_HEADER, &config.api_key)
            .send()
            .await?;
        let response = check_status(SERVICE, response).await?;
        let whoami: Whoami = response
            .json()
            .await
            .map_err(|err| AiError::malformed(SERVICE, err.to_string()))?;

        debug!(project = %whoami.project_name, "pinecone_init_complete");
        Ok(Self {
            config,
            whoami,
            http,
        })
    }

    pub fn environment(&self) -> &str {
        &self.config.environment
    }

    pub fn project_name(&self) -> &str {
        &self.whoami.project_name
    }

    pub fn whoami(&self) -> &Whoami {
        &self.whoami
    }

    /// Names of the indexes in this project.
    pub async fn list_indexes(&self) -> AiResult<Vec<String>> {
        let url = format!("{}/databases", self.config.controller());
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;
        let response = check_status(SERVICE, response).await?;
        response
            .json()
            .await
            .map_err(|err| AiError::malformed(SERVICE, err.to_string()))
    }

    /// Handle to the data plane of index `name`.
    pub fn index(&self, name: &str) -> IndexHandle {
        let host = format!(
            "https://{}-{}.svc.{}.pinecone.io",
            name, self.whoami.project_name, self.config.environment
        );
        IndexHandle {
            name: name.to_string(),
            host,
            api_key: self.config.api_key.clone(),
            http: self.http.clone(),
        }
    }
}

/// Data-plane handle for one index.
#[derive(Clone)]
pub struct IndexHandle {
    name: String,
    host: String,
    api_key: String,
    http: reqwest::Client,
}

impl fmt::Debug for IndexHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexHandle")
            .field("name", &self.name)
            .field("host", &self.host)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Debug, Deserialize)]
struct QueryMatch {
    id: String,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    metadata: Option<Map<String, Value>>,
}

impl IndexHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Send requests to `host` instead of the derived index host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Return the `top_k` nearest vectors to `vector`, metadata included.
    pub async fn query(&self, vector: &[f32], top_k: usize) -> AiResult<Vec<VectorSearchResult>> {
        debug!(index = %self.name, top_k, "pinecone_query");
        let response = self
            .http
            .post(format!("{}/query", self.host))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&json!({
                "vector": vector,
                "topK": top_k,
                "includeMetadata": true,
            }))
            .send()
            .await?;
        let response = check_status(SERVICE, response).await?;
        let body: QueryResponse = response
            .json()
            .await
            .map_err(|err| AiError::malformed(SERVICE, err.to_string()))?;

        Ok(body
            .matches
            .into_iter()
            .map(|m| VectorSearchResult {
                id: m.id,
                score: m.score,
                metadata: m.metadata.unwrap_or_default(),
            })
            .collect())
    }
}
