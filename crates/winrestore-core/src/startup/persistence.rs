use std::path::{Path, PathBuf};

use super::errors::StartupError;
use super::types::Settings;

/// Environment variable that overrides the settings file location
pub const SETTINGS_FILE_ENV: &str = "WINRESTORE_SETTINGS_FILE";

/// Location of `settings.json`, alongside `presets.json`.
pub fn settings_file_path() -> PathBuf {
    if let Ok(path_str) = std::env::var(SETTINGS_FILE_ENV)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::data_dir() {
        Some(dir) => dir.join("winrestore").join("settings.json"),
        None => {
            tracing::error!(
                event = "core.startup.data_dir_not_found",
                fallback = ".",
                "Could not determine data directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".winrestore").join("settings.json")
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self::new(settings_file_path())
    }
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing means defaults; unparseable is moved aside and treated as defaults.
    pub fn load(&self) -> Result<Settings, StartupError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StartupError::ReadFailed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        match serde_json::from_str(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                let backup = self.path.with_extension("json.bak");
                tracing::error!(
                    event = "core.startup.settings_parse_failed",
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %e
                );
                if let Err(rename_err) = std::fs::rename(&self.path, &backup) {
                    tracing::warn!(
                        event = "core.startup.backup_failed",
                        path = %self.path.display(),
                        error = %rename_err
                    );
                }
                Ok(Settings::default())
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), StartupError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StartupError::SaveFailed {
                message: format!("Failed to create directory ({}): {}", parent.display(), e),
            })?;
        }

        let json =
            serde_json::to_string_pretty(settings).map_err(|e| StartupError::SaveFailed {
                message: format!("Failed to serialize settings: {}", e),
            })?;

        std::fs::write(&self.path, json).map_err(|e| StartupError::SaveFailed {
            message: format!("Failed to write settings file ({}): {}", self.path.display(), e),
        })?;

        tracing::info!(event = "core.startup.settings_saved", path = %self.path.display());
        Ok(())
    }
}
