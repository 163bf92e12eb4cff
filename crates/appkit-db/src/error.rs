//! Error types for the database client factories.

use thiserror::Error;

/// Result type for database client operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors surfaced by the database clients.
///
/// Driver errors are wrapped unchanged so callers can still inspect them.
#[derive(Debug, Error)]
pub enum DbError {
    /// Transport-level failure talking to Supabase.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Supabase answered with a non-success status.
    #[error("Supabase returned {status}: {message}")]
    Supabase { status: u16, message: String },

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Neo4j error: {0}")]
    Neo4j(#[from] neo4rs::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Required configuration is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}
