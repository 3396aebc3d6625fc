use std::path::{Path, PathBuf};

use super::errors::StoreError;
use super::traits::LayoutStore;
use super::types::{Layout, LayoutSummary, PresetsFile};
use crate::window::WindowRecord;

/// Environment variable that overrides the layouts file location
pub const PRESETS_FILE_ENV: &str = "WINRESTORE_PRESETS_FILE";

/// Location of `presets.json`.
///
/// `WINRESTORE_PRESETS_FILE` wins when set and non-empty; otherwise the
/// platform data directory, falling back to `./.winrestore/presets.json`.
pub fn presets_file_path() -> PathBuf {
    if let Ok(path_str) = std::env::var(PRESETS_FILE_ENV)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::data_dir() {
        Some(dir) => dir.join("winrestore").join("presets.json"),
        None => {
            tracing::error!(
                event = "core.store.data_dir_not_found",
                fallback = ".",
                "Could not determine data directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".winrestore").join("presets.json")
        }
    }
}

/// Layouts kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonLayoutStore {
    path: PathBuf,
}

impl Default for JsonLayoutStore {
    fn default() -> Self {
        Self::new(presets_file_path())
    }
}

impl JsonLayoutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file. Missing means empty; unparseable is moved aside and treated as empty.
    fn read(&self) -> Result<PresetsFile, StoreError> {
        if !self.path.exists() {
            return Ok(PresetsFile::default());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StoreError::ReadFailed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        match serde_json::from_str(&content) {
            Ok(data) => Ok(data),
            Err(e) => {
                let backup = self.path.with_extension("json.bak");
                tracing::error!(
                    event = "core.store.json_parse_failed",
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "Layouts file contains invalid JSON - moving it aside and starting empty"
                );
                if let Err(rename_err) = std::fs::rename(&self.path, &backup) {
                    tracing::warn!(
                        event = "core.store.backup_failed",
                        path = %self.path.display(),
                        error = %rename_err
                    );
                }
                Ok(PresetsFile::default())
            }
        }
    }

    fn write(&self, data: &PresetsFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::SaveFailed {
                message: format!("Failed to create directory ({}): {}", parent.display(), e),
            })?;
        }

        let json = serde_json::to_string_pretty(data).map_err(|e| StoreError::SaveFailed {
            message: format!("Failed to serialize layouts: {}", e),
        })?;

        std::fs::write(&self.path, json).map_err(|e| StoreError::SaveFailed {
            message: format!("Failed to write layouts file ({}): {}", self.path.display(), e),
        })?;

        tracing::info!(
            event = "core.store.saved",
            path = %self.path.display(),
            count = data.presets.len()
        );
        Ok(())
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn unique_name(presets: &[Layout], name: &str) -> String {
    if !presets.iter().any(|p| same_name(&p.name, name)) {
        return name.to_string();
    }
    (2..)
        .map(|n| format!("{} ({})", name, n))
        .find(|candidate| !presets.iter().any(|p| same_name(&p.name, candidate)))
        .unwrap_or_else(|| name.to_string())
}

impl LayoutStore for JsonLayoutStore {
    fn save(&self, name: &str, windows: &[WindowRecord]) -> Result<LayoutSummary, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }
        if windows.is_empty() {
            return Err(StoreError::EmptyLayout {
                name: name.to_string(),
            });
        }

        let mut data = self.read()?;
        let layout = Layout::new(unique_name(&data.presets, name), windows.to_vec());
        let summary = layout.summary();
        data.presets.push(layout);
        self.write(&data)?;

        tracing::info!(
            event = "core.store.layout_saved",
            name = %summary.name,
            id = %summary.id,
            window_count = summary.window_count
        );
        Ok(summary)
    }

    fn load(&self, name: &str) -> Result<Option<Layout>, StoreError> {
        Ok(self
            .read()?
            .presets
            .into_iter()
            .find(|p| same_name(&p.name, name)))
    }

    fn load_by_id(&self, id: &str) -> Result<Option<Layout>, StoreError> {
        Ok(self.read()?.presets.into_iter().find(|p| p.id == id))
    }

    fn list(&self) -> Result<Vec<LayoutSummary>, StoreError> {
        Ok(self.read()?.presets.iter().map(Layout::summary).collect())
    }

    fn delete(&self, name: &str) -> Result<bool, StoreError> {
        let mut data = self.read()?;
        let before = data.presets.len();
        data.presets.retain(|p| !same_name(&p.name, name));
        if data.presets.len() == before {
            return Ok(false);
        }
        self.write(&data)?;
        tracing::info!(event = "core.store.layout_deleted", name = %name);
        Ok(true)
    }

    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut data = self.read()?;
        let before = data.presets.len();
        data.presets.retain(|p| p.id != id);
        if data.presets.len() == before {
            return Ok(false);
        }
        self.write(&data)?;
        tracing::info!(event = "core.store.layout_deleted", id = %id);
        Ok(true)
    }

    fn rename(&self, old_name: &str, new_name: &str) -> Result<(), StoreError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(StoreError::InvalidName);
        }

        let mut data = self.read()?;
        let index = data
            .presets
            .iter()
            .position(|p| same_name(&p.name, old_name))
            .ok_or_else(|| StoreError::NotFound {
                name: old_name.to_string(),
            })?;

        let taken = data
            .presets
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && same_name(&p.name, new_name));
        if taken {
            return Err(StoreError::AlreadyExists {
                name: new_name.to_string(),
            });
        }

        data.presets[index].name = new_name.to_string();
        self.write(&data)?;
        tracing::info!(
            event = "core.store.layout_renamed",
            old_name = %old_name,
            new_name = %new_name
        );
        Ok(())
    }
}
