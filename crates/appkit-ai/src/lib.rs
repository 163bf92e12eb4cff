//! AI service clients for appkit.
//!
//! Thin factories around an OpenAI-compatible completion API and the
//! Pinecone vector database, plus the schemas for AI-produced records.
//!
//! ```rust,ignore
//! use appkit_ai::{create_openai_client, create_pinecone_client};
//!
//! let openai = create_openai_client("sk-...");
//! let pinecone = create_pinecone_client("pc-...", "us-west1-gcp").await?;
//! let hits = pinecone.index("docs").query(&embedding, 5).await?;
//! ```

pub mod config;
pub mod error;
pub mod openai;
pub mod pinecone;
pub mod types;

pub use config::AiConfig;
pub use error::{AiError, AiResult};
pub use openai::{create_openai_client, ChatMessage, OpenAiClient, DEFAULT_OPENAI_API_URL};
pub use pinecone::{create_pinecone_client, IndexHandle, PineconeClient, PineconeConfig, Whoami};
pub use types::{AiAnalysis, VectorSearchResult};
