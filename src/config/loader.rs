use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use super::DaemonConfig;
use crate::utils::NODENEST_FOLDER;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Resolve the canonical path for the config file (`~/.nodenest/config.toml`).
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(NODENEST_FOLDER).join("config.toml"))
}

/// Load the configuration from `~/.nodenest/config.toml`.
///
/// Returns `Ok(DaemonConfig::default())` if the file does not exist.
pub async fn load_config() -> Result<DaemonConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path).await,
        None => {
            warn!("Could not determine home directory; using default config");
            Ok(DaemonConfig::default())
        }
    }
}

/// Load and validate the configuration at `path`, defaulting when absent.
pub async fn load_config_from(path: &Path) -> Result<DaemonConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Config not found at {}; using defaults", path.display());
            return Ok(DaemonConfig::default());
        }
        Err(e) => return Err(e.into()),
    };

    let config: DaemonConfig = toml::from_str(&content)?;
    config.validate().map_err(ConfigError::Invalid)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreBackend;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_absent_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml"))
            .await
            .unwrap();
        assert_eq!(cfg, DaemonConfig::default());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# nodenest\n[store]\nbackend = \"memory\"\n").unwrap();

        let cfg = load_config_from(&path).await.unwrap();
        assert_eq!(cfg.store.backend, StoreBackend::Memory);
    }

    #[tokio::test]
    async fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[content\nlimit = ").unwrap();

        assert!(matches!(
            load_config_from(&path).await,
            Err(ConfigError::Toml(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_values_are_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[content]\nlimit = 0\n").unwrap();

        assert!(matches!(
            load_config_from(&path).await,
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_config_path_location() {
        if let Some(path) = config_path() {
            assert!(path.ends_with(".nodenest/config.toml"));
        }
    }
}
