mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};

use crate::query::DEFAULT_SEARCH_LIMIT;

/// Debounce quiet window applied to autocomplete keystrokes.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Resolved configuration for the form component and the CLI.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub api_base_url: String,
    /// Initially selected data source. May be empty until the user picks one.
    pub database: String,
    pub debounce_ms: u64,
    pub search_limit: u32,
    pub request_timeout_secs: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            database: String::new(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            search_limit: DEFAULT_SEARCH_LIMIT,
            request_timeout_secs: 30,
        }
    }
}

impl FormConfig {
    /// Resolve configuration from CLI-provided values and an optional TOML
    /// file config. File values override CLI values for each field.
    pub fn resolve(cli: Self, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let config = Self {
            api_base_url: file.api_base_url.unwrap_or(cli.api_base_url),
            database: file.database.unwrap_or(cli.database),
            debounce_ms: file.debounce_ms.unwrap_or(cli.debounce_ms),
            search_limit: file.search_limit.unwrap_or(cli.search_limit),
            request_timeout_secs: file.request_timeout_secs.unwrap_or(cli.request_timeout_secs),
        };

        if config.api_base_url.is_empty() {
            bail!("api_base_url must not be empty");
        }
        if config.search_limit == 0 {
            bail!("search_limit must be at least 1");
        }

        Ok(config)
    }
}
