use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::restore::DEFAULT_SESSION_MANAGED_APPS;
use crate::snap::DEFAULT_SNAP_TOLERANCE;
use crate::window::{
    DEFAULT_EXCLUDED_PROCESSES, DEFAULT_EXCLUDED_TITLES, DEFAULT_OWN_DIALOG_TITLES,
    DEFAULT_OWN_PROCESS_NAMES,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Top-level configuration.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinrestoreConfig {
    pub capture: CaptureConfig,
    pub restore: RestoreConfig,
}

/// `[capture]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub include_tabs: bool,
    pub include_minimized: bool,
    /// Pixel slack for snap zone classification
    pub snap_tolerance: i32,
    pub excluded_titles: Vec<String>,
    pub excluded_processes: Vec<String>,
    pub own_process_names: Vec<String>,
    pub own_dialog_titles: Vec<String>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            include_tabs: false,
            include_minimized: false,
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
            excluded_titles: strings(DEFAULT_EXCLUDED_TITLES),
            excluded_processes: strings(DEFAULT_EXCLUDED_PROCESSES),
            own_process_names: strings(DEFAULT_OWN_PROCESS_NAMES),
            own_dialog_titles: strings(DEFAULT_OWN_DIALOG_TITLES),
        }
    }
}

/// `[restore]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreConfig {
    pub restore_session_apps: bool,
    pub restore_tabs: bool,
    /// Polls for a launched application's window before giving up
    pub launch_attempts: u32,
    pub poll_interval_ms: u64,
    /// Pause after a successful launch before polling starts
    pub launch_settle_ms: u64,
    pub min_width: i32,
    pub min_height: i32,
    pub session_managed_apps: Vec<String>,
    pub tab_key_delay_ms: u64,
    pub tab_open_delay_ms: u64,
}

impl Default for RestoreConfig {
    fn default() -> Self {
        Self {
            restore_session_apps: true,
            restore_tabs: false,
            launch_attempts: 10,
            poll_interval_ms: 1000,
            launch_settle_ms: 2000,
            min_width: 320,
            min_height: 220,
            session_managed_apps: strings(DEFAULT_SESSION_MANAGED_APPS),
            tab_key_delay_ms: 300,
            tab_open_delay_ms: 500,
        }
    }
}

impl WinrestoreConfig {
    /// Reject values that would make capture or restore misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capture.snap_tolerance < 0 {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "capture.snap_tolerance must not be negative (got {})",
                    self.capture.snap_tolerance
                ),
            });
        }

        if self.restore.launch_attempts == 0 {
            return Err(ConfigError::InvalidConfiguration {
                message: "restore.launch_attempts must be at least 1".to_string(),
            });
        }

        if self.restore.min_width <= 0 || self.restore.min_height <= 0 {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "restore.min_width and restore.min_height must be positive (got {}x{})",
                    self.restore.min_width, self.restore.min_height
                ),
            });
        }

        Ok(())
    }
}
