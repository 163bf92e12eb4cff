//! CLI configuration.
//!
//! Everything comes from the environment (with `.env` support); there is no
//! config file.

use appkit_ai::AiConfig;
use appkit_db::DbConfig;

/// Service configuration for every package the CLI can exercise.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub ai: AiConfig,
    pub db: DbConfig,
}

impl Config {
    /// Load from environment variables, reading `.env` if present.
    pub fn load() -> Self {
        Self {
            ai: AiConfig::from_env(),
            db: DbConfig::from_env(),
        }
    }
}
