//! Environment-driven configuration for the database clients.

use serde::{Deserialize, Serialize};

use crate::error::{DbError, DbResult};

/// Connection settings for every supported backend. All optional; each
/// factory only needs its own entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supabase_url: Option<String>,
    #[serde(skip_serializing)]
    pub supabase_key: Option<String>,
    /// May embed credentials, so it is never serialized.
    #[serde(skip_serializing)]
    pub mongodb_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neo4j_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neo4j_user: Option<String>,
    #[serde(skip_serializing)]
    pub neo4j_password: Option<String>,
    #[serde(skip_serializing)]
    pub redis_url: Option<String>,
}

const SECRET_KEYS: &[&str] = &["SUPABASE_KEY", "MONGODB_URI", "NEO4J_PASSWORD", "REDIS_URL"];

impl DbConfig {
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
            supabase_url: read("SUPABASE_URL"),
            supabase_key: read("SUPABASE_KEY"),
            mongodb_uri: read("MONGODB_URI"),
            neo4j_uri: read("NEO4J_URI"),
            neo4j_user: read("NEO4J_USER"),
            neo4j_password: read("NEO4J_PASSWORD"),
            redis_url: read("REDIS_URL"),
        }
    }

    pub fn require_supabase(&self) -> DbResult<(&str, &str)> {
        Ok((
            require(&self.supabase_url, "SUPABASE_URL")?,
            require(&self.supabase_key, "SUPABASE_KEY")?,
        ))
    }

    pub fn require_mongo(&self) -> DbResult<&str> {
        require(&self.mongodb_uri, "MONGODB_URI")
    }

    /// URI, user and password for Neo4j.
    pub fn require_neo4j(&self) -> DbResult<(&str, &str, &str)> {
        Ok((
            require(&self.neo4j_uri, "NEO4J_URI")?,
            require(&self.neo4j_user, "NEO4J_USER")?,
            require(&self.neo4j_password, "NEO4J_PASSWORD")?,
        ))
    }

    pub fn require_redis(&self) -> DbResult<&str> {
        require(&self.redis_url, "REDIS_URL")
    }

    /// Look up a value by environment key, masking secrets.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "SUPABASE_URL" => &self.supabase_url,
            "SUPABASE_KEY" => &self.supabase_key,
            "MONGODB_URI" => &self.mongodb_uri,
            "NEO4J_URI" => &self.neo4j_uri,
            "NEO4J_USER" => &self.neo4j_user,
            "NEO4J_PASSWORD" => &self.neo4j_password,
            "REDIS_URL" => &self.redis_url,
            _ => return None,
        };
        if SECRET_KEYS.contains(&key) {
            value.as_ref().map(|_| "***".to_string())
        } else {
            value.clone()
        }
    }

    /// Every key this config understands.
    pub fn keys() -> &'static [&'static str] {
        &[
            "SUPABASE_URL",
            "SUPABASE_KEY",
            "MONGODB_URI",
            "NEO4J_URI",
            "NEO4J_USER",
            "NEO4J_PASSWORD",
            "REDIS_URL",
        ]
    }
}

fn require<'a>(value: &'a Option<String>, key: &str) -> DbResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| DbError::Config(format!("{key} is not set")))
}
