//! Eligibility rules for captured windows.

use crate::config::CaptureConfig;
use crate::desktop::WindowSnapshot;
use crate::window::WindowState;

/// Shell, desktop and system windows, matched as case-insensitive title substrings
pub const DEFAULT_EXCLUDED_TITLES: &[&str] = &[
    "Program Manager",
    "Windows Input Experience",
    "Microsoft Text Input Application",
    "Windows Defender",
    "Security Health",
];

/// Shell and system processes that never belong in a layout
pub const DEFAULT_EXCLUDED_PROCESSES: &[&str] = &[
    "explorer.exe",
    "systemsettings.exe",
    "searchhost.exe",
    "startmenuexperiencehost.exe",
    "textinputhost.exe",
    "applicationframehost.exe",
];

/// Image names this utility runs as
pub const DEFAULT_OWN_PROCESS_NAMES: &[&str] = &["winrestore.exe", "winrestore"];

/// Titles of this utility's own dialogs
pub const DEFAULT_OWN_DIALOG_TITLES: &[&str] =
    &["Save Window Layout", "Window Restore - Manage Presets"];

/// Why a window was left out of a capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    NotVisible,
    EmptyTitle,
    ExcludedTitle(String),
    ExcludedProcess(String),
    ToolWindow,
    NoCaption,
    Minimized,
    OwnDialog,
}

impl Exclusion {
    pub fn reason(&self) -> &'static str {
        match self {
            Exclusion::NotVisible => "not_visible",
            Exclusion::EmptyTitle => "empty_title",
            Exclusion::ExcludedTitle(_) => "excluded_title",
            Exclusion::ExcludedProcess(_) => "excluded_process",
            Exclusion::ToolWindow => "tool_window",
            Exclusion::NoCaption => "no_caption",
            Exclusion::Minimized => "minimized",
            Exclusion::OwnDialog => "own_dialog",
        }
    }
}

/// Decides which live windows are eligible for capture.
///
/// Exclusion lists are injected so callers (and tests) can supply their own.
/// All entries are stored lowercased.
#[derive(Debug, Clone)]
pub struct WindowFilter {
    excluded_titles: Vec<String>,
    excluded_processes: Vec<String>,
    own_process_names: Vec<String>,
    own_dialog_titles: Vec<String>,
}

fn lowered<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Default for WindowFilter {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_TITLES,
            DEFAULT_EXCLUDED_PROCESSES,
            DEFAULT_OWN_PROCESS_NAMES,
            DEFAULT_OWN_DIALOG_TITLES,
        )
    }
}

impl WindowFilter {
    pub fn new<T, P, O, D>(
        excluded_titles: T,
        excluded_processes: P,
        own_process_names: O,
        own_dialog_titles: D,
    ) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Self {
            excluded_titles: lowered(excluded_titles),
            excluded_processes: lowered(excluded_processes),
            own_process_names: lowered(own_process_names),
            own_dialog_titles: lowered(own_dialog_titles),
        }
    }

    pub fn from_config(config: &CaptureConfig) -> Self {
        Self::new(
            &config.excluded_titles,
            &config.excluded_processes,
            &config.own_process_names,
            &config.own_dialog_titles,
        )
    }

    /// Apply the eligibility checks in order, stopping at the first failure.
    pub fn check(&self, window: &WindowSnapshot, include_minimized: bool) -> Result<(), Exclusion> {
        if !window.visible {
            return Err(Exclusion::NotVisible);
        }

        // Whitespace-only captions belong to placeholder and host windows
        if window.title.trim().is_empty() {
            return Err(Exclusion::EmptyTitle);
        }

        let title = window.title.to_lowercase();
        if let Some(excluded) = self.excluded_titles.iter().find(|t| title.contains(t.as_str())) {
            return Err(Exclusion::ExcludedTitle(excluded.clone()));
        }

        let process_name = window.process_name().map(str::to_lowercase);
        if let Some(name) = &process_name
            && self.excluded_processes.contains(name)
        {
            return Err(Exclusion::ExcludedProcess(name.clone()));
        }

        if window.tool_window {
            return Err(Exclusion::ToolWindow);
        }

        if !window.has_caption {
            return Err(Exclusion::NoCaption);
        }

        if window.state == WindowState::Minimized && !include_minimized {
            return Err(Exclusion::Minimized);
        }

        if let Some(name) = &process_name
            && self.own_process_names.contains(name)
            && self.own_dialog_titles.iter().any(|t| title.contains(t.as_str()))
        {
            return Err(Exclusion::OwnDialog);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::{ProcessInfo, WindowHandle};
    use crate::geometry::Rect;

    fn window(exe: &str, title: &str) -> WindowSnapshot {
        WindowSnapshot {
            handle: WindowHandle(1),
            title: title.to_string(),
            visible: true,
            tool_window: false,
            has_caption: true,
            rect: Rect::new(0, 0, 800, 600),
            state: WindowState::Normal,
            process: Some(ProcessInfo::from_path(exe)),
        }
    }

    #[test]
    fn test_accepts_ordinary_window() {
        let filter = WindowFilter::default();
        assert_eq!(
            filter.check(&window(r"C:\Windows\notepad.exe", "a.txt - Notepad"), false),
            Ok(())
        );
    }

    #[test]
    fn test_rejects_invisible_first() {
        let filter = WindowFilter::default();
        let mut w = window(r"C:\Windows\explorer.exe", "");
        w.visible = false;
        assert_eq!(filter.check(&w, false), Err(Exclusion::NotVisible));
    }

    #[test]
    fn test_rejects_empty_title() {
        let filter = WindowFilter::default();
        let w = window(r"C:\Windows\notepad.exe", "   ");
        assert_eq!(filter.check(&w, false), Err(Exclusion::EmptyTitle));
    }

    #[test]
    fn test_rejects_excluded_title_case_insensitive() {
        let filter = WindowFilter::default();
        let w = window(r"C:\Windows\notepad.exe", "PROGRAM MANAGER");
        assert_eq!(
            filter.check(&w, false),
            Err(Exclusion::ExcludedTitle("program manager".to_string()))
        );
    }

    #[test]
    fn test_rejects_excluded_process() {
        let filter = WindowFilter::default();
        let w = window(r"C:\Windows\Explorer.EXE", "Downloads");
        assert_eq!(
            filter.check(&w, false),
            Err(Exclusion::ExcludedProcess("explorer.exe".to_string()))
        );
    }

    #[test]
    fn test_rejects_tool_window_and_captionless() {
        let filter = WindowFilter::default();
        let mut w = window(r"C:\Apps\overlay.exe", "Overlay");
        w.tool_window = true;
        assert_eq!(filter.check(&w, false), Err(Exclusion::ToolWindow));

        let mut w = window(r"C:\Apps\overlay.exe", "Overlay");
        w.has_caption = false;
        assert_eq!(filter.check(&w, false), Err(Exclusion::NoCaption));
    }

    #[test]
    fn test_minimized_depends_on_flag() {
        let filter = WindowFilter::default();
        let mut w = window(r"C:\Windows\notepad.exe", "a.txt - Notepad");
        w.state = WindowState::Minimized;
        assert_eq!(filter.check(&w, false), Err(Exclusion::Minimized));
        assert_eq!(filter.check(&w, true), Ok(()));
    }

    #[test]
    fn test_rejects_own_dialogs_only() {
        let filter = WindowFilter::default();
        let dialog = window(r"C:\Tools\winrestore.exe", "Save Window Layout");
        assert_eq!(filter.check(&dialog, false), Err(Exclusion::OwnDialog));

        // Same title from another program is kept
        let other = window(r"C:\Apps\editor.exe", "Save Window Layout");
        assert_eq!(filter.check(&other, false), Ok(()));
    }

    #[test]
    fn test_unresolved_process_is_not_rejected_by_filter() {
        let filter = WindowFilter::default();
        let mut w = window(r"C:\Apps\app.exe", "App");
        w.process = None;
        assert_eq!(filter.check(&w, false), Ok(()));
    }

    #[test]
    fn test_custom_exclusions() {
        let filter = WindowFilter::new(["secret"], ["game.exe"], Vec::<String>::new(), Vec::<String>::new());
        assert!(filter.check(&window(r"C:\a\app.exe", "Top Secret Plan"), false).is_err());
        assert!(filter.check(&window(r"C:\a\game.exe", "Game"), false).is_err());
        // Defaults no longer apply
        assert!(filter.check(&window(r"C:\Windows\explorer.exe", "Docs"), false).is_ok());
    }
}
