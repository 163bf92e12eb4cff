//! Config command implementation.

use appkit_ai::AiConfig;
use appkit_db::DbConfig;

use crate::config::Config;

/// Print every known key with its (masked) value.
pub fn show(config: &Config) {
    println!("appkit configuration");
    println!("{:-<40}", "");

    for key in AiConfig::keys() {
        print_entry(key, config.ai.get(key));
    }
    for key in DbConfig::keys() {
        print_entry(key, config.db.get(key));
    }
}

fn print_entry(key: &str, value: Option<String>) {
    println!(
        "{:<22} {}",
        key,
        value.unwrap_or_else(|| "(not set)".to_string())
    );
}
