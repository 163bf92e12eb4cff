//! Database clients and domain record schemas for appkit.
//!
//! | Factory                  | Backend  | Returns              |
//! |--------------------------|----------|----------------------|
//! | [`create_supabase_client`] | Supabase | [`SupabaseClient`]   |
//! | [`create_mongo_client`]  | MongoDB  | `mongodb::Client`    |
//! | [`create_neo4j_driver`]  | Neo4j    | `neo4rs::Graph`      |
//! | [`create_redis`]         | Redis    | `redis::Client`      |
//!
//! Every call builds a fresh handle; lifetime management is the caller's.

pub mod config;
pub mod drivers;
pub mod error;
pub mod supabase;
pub mod types;

pub use config::DbConfig;
pub use drivers::{create_mongo_client, create_neo4j_driver, create_redis};
pub use error::{DbError, DbResult};
pub use supabase::{create_supabase_client, SupabaseClient, TableQuery};
pub use types::{Event, Role, User};
