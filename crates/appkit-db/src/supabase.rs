//! Supabase REST client.
//!
//! Talks to the PostgREST endpoint under `{url}/rest/v1` with the project
//! key sent both as `apikey` and as a bearer token.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{DbError, DbResult};

const REST_PATH: &str = "rest/v1";

/// Build a Supabase client for project `url` using `key`.
///
/// Only presence is checked; a wrong key or unreachable project shows up on
/// the first request.
pub fn create_supabase_client(
    url: impl Into<String>,
    key: impl Into<String>,
) -> DbResult<SupabaseClient> {
    SupabaseClient::new(url, key)
}

/// Handle to one Supabase project.
#[derive(Clone)]
pub struct SupabaseClient {
    url: String,
    key: String,
    http: reqwest::Client,
}

impl fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("url", &self.url)
            .field("key", &"***")
            .finish()
    }
}

impl SupabaseClient {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> DbResult<Self> {
        let url = url.into().trim_end_matches('/').to_string();
        let key = key.into();
        if url.is_empty() {
            return Err(DbError::Config("supabaseUrl is required.".to_string()));
        }
        if key.is_empty() {
            return Err(DbError::Config("supabaseKey is required.".to_string()));
        }

        let invalid_key = |_| DbError::Config("Supabase key is not a valid header value".into());
        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(&key).map_err(invalid_key)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {key}")).map_err(invalid_key)?,
        );
        let http = reqwest::Client::builder().default_headers(headers).build()?;

        debug!(url = %url, "supabase_client_created");
        Ok(Self { url, key, http })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Base URL of the PostgREST API.
    pub fn rest_url(&self) -> String {
        format!("{}/{}", self.url, REST_PATH)
    }

    /// Start a query against `table`.
    pub fn from(&self, table: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: table.to_string(),
            params: Vec::new(),
        }
    }
}

/// Query builder for a single table.
#[derive(Debug, Clone)]
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    params: Vec<(String, String)>,
}

impl TableQuery<'_> {
    /// Columns to return, e.g. `"id,email"` or `"*"`.
    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    /// Keep rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    #[must_use]
    pub fn limit(mut self, count: usize) -> Self {
        self.params.push(("limit".to_string(), count.to_string()));
        self
    }

    pub fn url(&self) -> String {
        format!("{}/{}", self.client.rest_url(), self.table)
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Run the query and return matching rows.
    pub async fn execute(self) -> DbResult<Vec<Value>> {
        debug!(table = %self.table, "supabase_select");
        let response = self
            .client
            .http
            .get(self.url())
            .query(&self.params)
            .send()
            .await?;
        read_rows(response).await
    }

    /// Insert `rows` and return them as stored.
    pub async fn insert<T: Serialize>(self, rows: &[T]) -> DbResult<Vec<Value>> {
        debug!(table = %self.table, count = rows.len(), "supabase_insert");
        let response = self
            .client
            .http
            .post(self.url())
            .header("Prefer", "return=representation")
            .json(rows)
            .send()
            .await?;
        read_rows(response).await
    }
}

async fn read_rows(response: reqwest::Response) -> DbResult<Vec<Value>> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(DbError::Supabase {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_url_and_key() {
        assert!(matches!(
            create_supabase_client("", "key"),
            Err(DbError::Config(_))
        ));
        assert!(matches!(
            create_supabase_client("https://xyz.supabase.co", ""),
            Err(DbError::Config(_))
        ));
    }

    #[test]
    fn builds_rest_urls() {
        let client = create_supabase_client("https://xyz.supabase.co/", "anon").unwrap();
        assert_eq!(client.url(), "https://xyz.supabase.co");
        assert_eq!(client.rest_url(), "https://xyz.supabase.co/rest/v1");

        let query = client.from("users").select("id,email").eq("role", "OWNER").limit(5);
        assert_eq!(query.url(), "https://xyz.supabase.co/rest/v1/users");
        assert_eq!(
            query.params(),
            &[
                ("select".to_string(), "id,email".to_string()),
                ("role".to_string(), "eq.OWNER".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn debug_output_masks_the_key() {
        let client = create_supabase_client("https://xyz.supabase.co", "service-secret").unwrap();
        assert!(!format!("{client:?}").contains("service-secret"));
    }
}
