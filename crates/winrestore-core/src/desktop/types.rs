use std::path::Path;

use crate::geometry::Rect;
use crate::window::WindowState;

/// Opaque handle of a live top-level window.
///
/// Only meaningful within the desktop session that produced it; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// The process that owns a window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    /// Image file name, e.g. `chrome.exe`
    pub name: String,
    /// Absolute path of the process image
    pub path: String,
}

impl ProcessInfo {
    /// Build from a full image path, deriving the name from its last component.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: executable_name(&path),
            path,
        }
    }
}

/// Everything the core needs to know about one live window, read in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub handle: WindowHandle,
    pub title: String,
    /// The OS visible flag
    pub visible: bool,
    /// Carries the tool-window extended style
    pub tool_window: bool,
    /// Carries a title-bar style
    pub has_caption: bool,
    pub rect: Rect,
    pub state: WindowState,
    /// `None` when the owning process image could not be resolved
    pub process: Option<ProcessInfo>,
}

impl WindowSnapshot {
    pub fn process_name(&self) -> Option<&str> {
        self.process.as_ref().map(|p| p.name.as_str())
    }

    pub fn process_path(&self) -> Option<&str> {
        self.process.as_ref().map(|p| p.path.as_str())
    }
}

/// One unit of synthetic keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyStroke {
    /// Ctrl + the given key, e.g. `Ctrl+L`
    Ctrl(char),
    /// Literal text typed as unicode input
    Text(String),
    Enter,
}

/// Lowercased base file name of an executable path.
///
/// Accepts both `\` and `/` separators so records saved on Windows compare
/// correctly wherever they are read.
pub fn executable_name(path: &str) -> String {
    let trimmed = path.trim().trim_matches('"');
    let name = trimmed
        .rsplit(['\\', '/'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(trimmed);
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name)
        .to_lowercase()
}
