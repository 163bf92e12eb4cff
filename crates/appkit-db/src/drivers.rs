//! Factories for the native database drivers.
//!
//! Each function hands its arguments straight to the driver. Nothing here
//! validates input, pools, retries, or closes the returned handles.

use neo4rs::Graph;
use tracing::debug;

use crate::error::DbResult;

/// MongoDB client for `uri`.
///
/// Connection strings are parsed asynchronously (`mongodb+srv` needs a DNS
/// lookup); no server connection is opened until the client is used.
pub async fn create_mongo_client(uri: &str) -> DbResult<mongodb::Client> {
    let client = mongodb::Client::with_uri_str(uri).await?;
    debug!("mongo_client_created");
    Ok(client)
}

/// Neo4j driver authenticated with basic credentials.
pub async fn create_neo4j_driver(uri: &str, user: &str, password: &str) -> DbResult<Graph> {
    let graph = Graph::new(uri, user, password).await?;
    debug!(uri, user, "neo4j_driver_created");
    Ok(graph)
}

/// Redis client for `url`. Connections are opened on demand.
pub fn create_redis(url: &str) -> DbResult<redis::Client> {
    let client = redis::Client::open(url)?;
    debug!("redis_client_created");
    Ok(client)
}
