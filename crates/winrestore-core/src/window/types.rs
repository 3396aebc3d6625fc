use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::snap::SnapZone;

/// Display state of a window, derived from the OS show command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Maximized,
    Minimized,
}

impl WindowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowState::Normal => "normal",
            WindowState::Maximized => "maximized",
            WindowState::Minimized => "minimized",
        }
    }
}

impl std::fmt::Display for WindowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An open browser tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserTab {
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// One captured window.
///
/// Created once per capture and never mutated afterwards; restore reads it only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    /// Absolute path of the owning process image; the primary identity key
    pub executable: String,
    /// Caption at capture time; secondary match key
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub bounds: Rect,
    #[serde(default)]
    pub state: WindowState,
    /// Monitor index at capture time; advisory only
    #[serde(default)]
    pub monitor: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_type: Option<SnapZone>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<BrowserTab>,
}

impl WindowRecord {
    /// Build a record, dropping `snap_type` unless the state is normal.
    pub fn new(
        executable: impl Into<String>,
        title: impl Into<String>,
        bounds: Rect,
        state: WindowState,
        monitor: usize,
        snap_type: Option<SnapZone>,
    ) -> Self {
        Self {
            executable: executable.into(),
            title: title.into(),
            bounds,
            state,
            monitor,
            snap_type: snap_type.filter(|_| state == WindowState::Normal),
            tabs: Vec::new(),
        }
    }

    pub fn with_tabs(mut self, tabs: Vec<BrowserTab>) -> Self {
        self.tabs = tabs;
        self
    }

    /// Lowercased base file name of the executable.
    pub fn executable_name(&self) -> String {
        crate::desktop::executable_name(&self.executable)
    }
}
