//! Daemon configuration loaded from `~/.nodenest/config.toml`.
//!
//! The file is optional; missing tables and fields fall back to their
//! `Default` values. Command-line flags override whatever is loaded here.

mod loader;

pub use loader::{config_path, load_config, load_config_from, ConfigError};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::assist::DEFAULT_GENERATION_TIMEOUT_SECS;
use crate::repository::DEFAULT_LIMIT;
use crate::utils::nodenest_home;

/// Which document store backs the daemon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Volatile, in-process
    Memory,
    /// One JSON file per document under `data_dir`
    #[default]
    Fs,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "fs" | "file" => Ok(StoreBackend::Fs),
            other => Err(format!("Unknown store backend: {other}")),
        }
    }
}

/// `[store]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Defaults to `~/.nodenest/data`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl StoreConfig {
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| nodenest_home().join("data"))
    }
}

/// `[content]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Cap on every listing
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// `[assist]` table. Generation is disabled unless `endpoint` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AssistConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_GENERATION_TIMEOUT_SECS,
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_GENERATION_TIMEOUT_SECS
}

/// Top-level daemon configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DaemonConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub assist: AssistConfig,
}

impl DaemonConfig {
    /// Validate the config and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.content.limit == 0 {
            return Err("content.limit must be at least 1".to_string());
        }
        if self.assist.timeout_secs == 0 || self.assist.timeout_secs > 600 {
            return Err(format!(
                "assist.timeout_secs must be between 1 and 600 seconds, got {}",
                self.assist.timeout_secs
            ));
        }
        if let Some(endpoint) = &self.assist.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(format!(
                    "assist.endpoint must be an http(s) URL, got '{endpoint}'"
                ));
            }
        }
        Ok(())
    }
}
