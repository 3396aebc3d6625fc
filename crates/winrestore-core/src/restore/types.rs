use std::collections::HashSet;
use std::time::Duration;

use serde::Serialize;

use crate::config::RestoreConfig;
use crate::desktop::executable_name;

/// Browser-class applications that keep their own window and tab session
pub const DEFAULT_SESSION_MANAGED_APPS: &[&str] = &[
    "chrome.exe",
    "msedge.exe",
    "firefox.exe",
    "brave.exe",
    "opera.exe",
];

/// Smallest window size restore will produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinSize {
    pub width: i32,
    pub height: i32,
}

impl Default for MinSize {
    fn default() -> Self {
        Self {
            width: 320,
            height: 220,
        }
    }
}

/// Tunables for a restore run
#[derive(Debug, Clone, PartialEq)]
pub struct RestoreOptions {
    /// When false, session-managed applications are skipped entirely
    pub restore_session_apps: bool,
    pub restore_tabs: bool,
    pub launch_attempts: u32,
    pub poll_interval: Duration,
    pub launch_settle: Duration,
    pub min_size: MinSize,
    /// Lowercased executable names
    pub session_managed_apps: Vec<String>,
    pub tab_key_delay: Duration,
    pub tab_open_delay: Duration,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self::from_config(&RestoreConfig::default())
    }
}

impl RestoreOptions {
    pub fn from_config(config: &RestoreConfig) -> Self {
        Self {
            restore_session_apps: config.restore_session_apps,
            restore_tabs: config.restore_tabs,
            launch_attempts: config.launch_attempts,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            launch_settle: Duration::from_millis(config.launch_settle_ms),
            min_size: MinSize {
                width: config.min_width,
                height: config.min_height,
            },
            session_managed_apps: config
                .session_managed_apps
                .iter()
                .map(|s| s.trim().to_lowercase())
                .collect(),
            tab_key_delay: Duration::from_millis(config.tab_key_delay_ms),
            tab_open_delay: Duration::from_millis(config.tab_open_delay_ms),
        }
    }

    pub fn is_session_managed(&self, executable: &str) -> bool {
        let name = executable_name(executable);
        self.session_managed_apps.contains(&name)
    }
}

/// How a record was handled. Every variant counts as restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum RestoreOutcome {
    /// Minimized records are never acted on
    SkippedMinimized,
    /// Session-managed application with session restore disabled
    SkippedByPolicy,
    /// Session-managed window found and brought forward, geometry untouched
    Surfaced,
    /// Session-managed application launched without waiting for a window
    LaunchedSessionApp,
    /// Session-managed application already launched earlier in this run
    AlreadyLaunched,
    Placed { launched: bool, snapped: bool },
}

impl std::fmt::Display for RestoreOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestoreOutcome::SkippedMinimized => write!(f, "skipped (minimized)"),
            RestoreOutcome::SkippedByPolicy => write!(f, "skipped (session app policy)"),
            RestoreOutcome::Surfaced => write!(f, "surfaced"),
            RestoreOutcome::LaunchedSessionApp => write!(f, "launched"),
            RestoreOutcome::AlreadyLaunched => write!(f, "already launched"),
            RestoreOutcome::Placed { launched, snapped } => {
                let how = if *snapped { "snapped" } else { "placed" };
                if *launched {
                    write!(f, "launched and {}", how)
                } else {
                    write!(f, "{}", how)
                }
            }
        }
    }
}

/// Executables launched during one restore run, keyed by lowercased path
#[derive(Debug, Clone, Default)]
pub struct LaunchedApps(HashSet<String>);

impl LaunchedApps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, executable: &str) -> bool {
        self.0.contains(&executable.to_lowercase())
    }

    /// Returns false if the executable was already recorded.
    pub fn insert(&mut self, executable: &str) -> bool {
        self.0.insert(executable.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of restoring one record
#[derive(Debug, Clone, Serialize)]
pub struct RestoreEntry {
    pub executable: String,
    pub title: String,
    #[serde(flatten)]
    pub outcome: Option<RestoreOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RestoreEntry {
    pub fn is_restored(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Summary of a restore run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RestoreReport {
    pub attempted: usize,
    pub restored: usize,
    pub entries: Vec<RestoreEntry>,
}

impl RestoreReport {
    pub fn failed(&self) -> usize {
        self.attempted - self.restored
    }

    pub fn is_success(&self) -> bool {
        self.restored > 0
    }
}
