use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_INTERVAL_HOURS: u64 = 15;

/// TOML-backed configuration loaded from disk.
/// Secrets (API key, DB URL) stay as env vars.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Identifiers handed to each source on every collection pass.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// Publisher sites passed to the fact-check search API.
    #[serde(default)]
    pub fact_check_publishers: Vec<String>,
    /// Feed URLs whose entries are all labeled as facts.
    #[serde(default)]
    pub real_feeds: Vec<String>,
    /// Feed URLs whose entries are all labeled as fakes.
    #[serde(default)]
    pub fake_feeds: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorConfig {
    #[serde(default = "default_interval_hours")]
    pub interval_hours: u64,
}

impl CollectorConfig {
    /// Hours that don't fit in seconds fall back to the default interval.
    pub fn interval(&self) -> Duration {
        match self.interval_hours.checked_mul(3600) {
            Some(secs) => Duration::from_secs(secs),
            None => {
                tracing::warn!(
                    interval_hours = self.interval_hours,
                    fallback_hours = DEFAULT_INTERVAL_HOURS,
                    "Collection interval too large, using default"
                );
                Duration::from_secs(DEFAULT_INTERVAL_HOURS * 3600)
            }
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            interval_hours: DEFAULT_INTERVAL_HOURS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory of static assets served at `/`. Not served when unset.
    #[serde(default)]
    pub public_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: None,
        }
    }
}

fn default_interval_hours() -> u64 {
    DEFAULT_INTERVAL_HOURS
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Load and parse a TOML config file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
