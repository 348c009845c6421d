//! Command-line tool settings
//!
//! Loaded from environment variables (and a `.env` file when present) with
//! sensible defaults. Command-line flags override these in `main`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Settings for the `datalake-config` binary
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,

    /// Tracing filter directive used when `RUST_LOG` is unset
    pub log_level: String,

    /// Print single-line JSON instead of pretty-printed JSON
    pub compact_output: bool,
}

impl Settings {
    /// Load settings from environment variables with defaults
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let settings = Self {
            app_name: env_or_default("APP_NAME", "datalake-config"),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: env_or_default("LOG_LEVEL", "info"),
            compact_output: parse_bool("OUTPUT_COMPACT", &env_or_default("OUTPUT_COMPACT", "false"))?,
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings
    fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            anyhow::bail!("LOG_LEVEL cannot be empty");
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "datalake-config".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            compact_output: false,
        }
    }
}

/// Helper function to get environment variable with default
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value
        .trim()
        .to_lowercase()
        .parse::<bool>()
        .with_context(|| format!("Invalid {} value: {:?} (expected true or false)", key, value))
}
