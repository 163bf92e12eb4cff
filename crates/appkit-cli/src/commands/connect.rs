//! Connect command implementation.
//!
//! Builds one client from environment configuration. Only Pinecone and
//! Neo4j do any work up front; the others just construct a handle.

use anyhow::Result;
use appkit_ai::{create_openai_client, create_pinecone_client};
use appkit_db::{create_mongo_client, create_neo4j_driver, create_redis, create_supabase_client};
use clap::ValueEnum;
use tracing::info;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Service {
    Openai,
    Pinecone,
    Supabase,
    Mongo,
    #[value(name = "neo4j")]
    Neo4j,
    Redis,
}

pub async fn execute(config: &Config, service: Service) -> Result<()> {
    info!(?service, "connect");

    match service {
        Service::Openai => {
            let key = config.ai.require_openai_key()?;
            let mut client = create_openai_client(key);
            if let Some(url) = &config.ai.openai_api_url {
                client = client.with_base_url(url);
            }
            println!("OpenAI client ready ({})", client.base_url());
        }
        Service::Pinecone => {
            let (key, environment) = config.ai.require_pinecone()?;
            let client = create_pinecone_client(key, environment).await?;
            println!(
                "Pinecone client ready (project {}, environment {})",
                client.project_name(),
                client.environment()
            );
        }
        Service::Supabase => {
            let (url, key) = config.db.require_supabase()?;
            let client = create_supabase_client(url, key)?;
            println!("Supabase client ready ({})", client.rest_url());
        }
        Service::Mongo => {
            let uri = config.db.require_mongo()?;
            let _client = create_mongo_client(uri).await?;
            println!("MongoDB client ready");
        }
        Service::Neo4j => {
            let (uri, user, password) = config.db.require_neo4j()?;
            let _graph = create_neo4j_driver(uri, user, password).await?;
            println!("Neo4j driver ready ({uri})");
        }
        Service::Redis => {
            let url = config.db.require_redis()?;
            let _client = create_redis(url)?;
            println!("Redis client ready");
        }
    }

    Ok(())
}
