use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::errors::ConfigError;
use super::types::WinrestoreConfig;

/// Environment variable that overrides the config file location
pub const CONFIG_FILE_ENV: &str = "WINRESTORE_CONFIG";

/// Location of `config.toml`.
///
/// `WINRESTORE_CONFIG` wins when set and non-empty; otherwise the platform
/// config directory, falling back to `./.winrestore/config.toml`.
pub fn config_file_path() -> PathBuf {
    if let Ok(path_str) = std::env::var(CONFIG_FILE_ENV)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("winrestore").join("config.toml"),
        None => {
            tracing::warn!(
                event = "core.config.config_dir_not_found",
                fallback = ".",
                "Could not determine config directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".winrestore").join("config.toml")
        }
    }
}

/// Load the configuration from its default location.
pub fn load_config() -> Result<WinrestoreConfig, ConfigError> {
    load_config_from(&config_file_path())
}

/// Load and validate the configuration at `path`. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<WinrestoreConfig, ConfigError> {
    if !path.exists() {
        debug!(
            event = "core.config.file_missing",
            path = %path.display()
        );
        return Ok(WinrestoreConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: WinrestoreConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    config.validate()?;

    info!(
        event = "core.config.load_completed",
        path = %path.display()
    );
    Ok(config)
}
