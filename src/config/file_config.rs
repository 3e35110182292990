use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional TOML configuration. Every field can also be set on the command
/// line; file values override CLI values where present.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub api_base_url: Option<String>,
    pub database: Option<String>,
    pub debounce_ms: Option<u64>,
    pub search_limit: Option<u32>,
    pub request_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
