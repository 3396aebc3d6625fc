//! Finds the live window that best corresponds to a saved record.

use tracing::{debug, warn};

use crate::desktop::{Desktop, WindowHandle, WindowSnapshot, executable_name};

/// Find the best live window for `executable` and `title`.
///
/// Returns `None` when no visible window of that executable exists or the
/// window list cannot be read.
pub fn find_best(desktop: &dyn Desktop, executable: &str, title: &str) -> Option<WindowHandle> {
    let windows = match desktop.windows() {
        Ok(windows) => windows,
        Err(e) => {
            warn!(event = "core.matcher.enumeration_failed", error = %e);
            return None;
        }
    };

    let found = choose_best(&windows, executable, title);
    debug!(
        event = "core.matcher.search_completed",
        executable = %executable,
        title = %title,
        found = found.is_some()
    );
    found
}

/// Pick the best candidate from an already enumerated window list.
///
/// Candidates are visible, titled windows whose executable base name matches.
/// Preference order: exact title (trimmed, case-insensitive), then title
/// substring, then largest area. Ties go to the first window seen.
pub fn choose_best(
    windows: &[WindowSnapshot],
    executable: &str,
    title: &str,
) -> Option<WindowHandle> {
    let target = executable_name(executable);
    let candidates: Vec<&WindowSnapshot> = windows
        .iter()
        // Same title rule as capture, so a whitespace-only caption never matches
        .filter(|w| w.visible && !w.title.trim().is_empty())
        .filter(|w| w.process_name().is_some_and(|n| n.eq_ignore_ascii_case(&target)))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let wanted = title.trim().to_lowercase();
    if !wanted.is_empty() {
        if let Some(exact) = candidates
            .iter()
            .find(|w| w.title.trim().to_lowercase() == wanted)
        {
            return Some(exact.handle);
        }
        if let Some(partial) = candidates
            .iter()
            .find(|w| w.title.to_lowercase().contains(&wanted))
        {
            return Some(partial.handle);
        }
    }

    let mut best = candidates[0];
    for &candidate in &candidates[1..] {
        if candidate.rect.area() > best.rect.area() {
            best = candidate;
        }
    }
    Some(best.handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::{FakeDesktop, FakeWindow};
    use crate::geometry::Rect;

    const CHROME: &str = r"C:\Program Files\Google\Chrome\Application\chrome.exe";

    #[test]
    fn test_exact_title_beats_substring() {
        let desktop = FakeDesktop::single_monitor();
        desktop.add_window(FakeWindow::new(
            CHROME,
            "GitHub - Pricing",
            Rect::new(0, 0, 1600, 900),
        ));
        let exact = desktop.add_window(FakeWindow::new(CHROME, "GitHub", Rect::new(0, 0, 400, 300)));

        assert_eq!(find_best(&desktop, "chrome.exe", "GitHub"), Some(exact));
    }

    #[test]
    fn test_exact_title_is_case_and_whitespace_insensitive() {
        let desktop = FakeDesktop::single_monitor();
        let handle = desktop.add_window(FakeWindow::new(CHROME, "  github ", Rect::new(0, 0, 400, 300)));
        assert_eq!(find_best(&desktop, CHROME, "GitHub"), Some(handle));
    }

    #[test]
    fn test_substring_match() {
        let desktop = FakeDesktop::single_monitor();
        desktop.add_window(FakeWindow::new(CHROME, "Inbox", Rect::new(0, 0, 1600, 900)));
        let handle = desktop.add_window(FakeWindow::new(
            CHROME,
            "Rust Docs - Chrome",
            Rect::new(0, 0, 400, 300),
        ));
        assert_eq!(find_best(&desktop, CHROME, "rust docs"), Some(handle));
    }

    #[test]
    fn test_falls_back_to_largest_area() {
        let desktop = FakeDesktop::single_monitor();
        desktop.add_window(FakeWindow::new(CHROME, "Small", Rect::new(0, 0, 400, 300)));
        let large = desktop.add_window(FakeWindow::new(CHROME, "Large", Rect::new(0, 0, 1600, 900)));
        desktop.add_window(FakeWindow::new(CHROME, "Also large", Rect::new(10, 10, 1600, 900)));

        assert_eq!(find_best(&desktop, CHROME, "Missing title"), Some(large));
        assert_eq!(find_best(&desktop, CHROME, ""), Some(large));
    }

    #[test]
    fn test_ignores_other_executables_and_hidden_windows() {
        let desktop = FakeDesktop::single_monitor();
        desktop.add_window(FakeWindow::new(
            r"C:\Windows\notepad.exe",
            "GitHub",
            Rect::new(0, 0, 400, 300),
        ));
        desktop.add_window(FakeWindow::new(CHROME, "GitHub", Rect::new(0, 0, 400, 300)).hidden());

        assert_eq!(find_best(&desktop, CHROME, "GitHub"), None);
    }

    #[test]
    fn test_whitespace_title_is_never_a_candidate() {
        let desktop = FakeDesktop::single_monitor();
        desktop.add_window(FakeWindow::new(CHROME, "   ", Rect::new(0, 0, 1600, 900)));
        let titled = desktop.add_window(FakeWindow::new(CHROME, "Inbox", Rect::new(0, 0, 400, 300)));

        assert_eq!(find_best(&desktop, CHROME, "Missing title"), Some(titled));
    }

    #[test]
    fn test_enumeration_failure_finds_nothing() {
        let desktop = FakeDesktop::single_monitor().failing_windows();
        assert_eq!(find_best(&desktop, CHROME, "GitHub"), None);
    }
}
