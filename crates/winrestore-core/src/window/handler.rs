use tracing::{debug, info, warn};

use super::filter::WindowFilter;
use super::types::{WindowRecord, WindowState};
use crate::config::CaptureConfig;
use crate::desktop::{Desktop, WindowSnapshot};
use crate::monitor::{MonitorDescriptor, list_monitors, nearest_monitor};
use crate::snap::{DEFAULT_SNAP_TOLERANCE, classify};
use crate::tabs::TabSource;

/// Walks the live window set and turns eligible windows into records.
#[derive(Debug, Clone)]
pub struct WindowEnumerator {
    filter: WindowFilter,
    snap_tolerance: i32,
}

impl Default for WindowEnumerator {
    fn default() -> Self {
        Self::new(WindowFilter::default(), DEFAULT_SNAP_TOLERANCE)
    }
}

impl WindowEnumerator {
    pub fn new(filter: WindowFilter, snap_tolerance: i32) -> Self {
        Self {
            filter,
            snap_tolerance,
        }
    }

    pub fn from_config(config: &CaptureConfig) -> Self {
        Self::new(WindowFilter::from_config(config), config.snap_tolerance)
    }

    /// Capture every eligible window.
    ///
    /// Never fails: windows whose metadata cannot be read are skipped, and an
    /// enumeration failure yields an empty capture.
    pub fn capture_all(
        &self,
        desktop: &dyn Desktop,
        tab_source: &dyn TabSource,
        include_tabs: bool,
        include_minimized: bool,
    ) -> Vec<WindowRecord> {
        info!(
            event = "core.capture.started",
            include_tabs = include_tabs,
            include_minimized = include_minimized
        );

        let windows = match desktop.windows() {
            Ok(windows) => windows,
            Err(e) => {
                warn!(event = "core.capture.enumeration_failed", error = %e);
                return Vec::new();
            }
        };
        let monitors = list_monitors(desktop);

        let records: Vec<WindowRecord> = windows
            .iter()
            .filter(|w| match self.filter.check(w, include_minimized) {
                Ok(()) => true,
                Err(exclusion) => {
                    debug!(
                        event = "core.capture.window_excluded",
                        handle = %w.handle,
                        title = %w.title,
                        reason = exclusion.reason()
                    );
                    false
                }
            })
            .filter_map(|w| self.record_for(w, &monitors, tab_source, include_tabs))
            .collect();

        for record in &records {
            debug!(
                event = "core.capture.window_captured",
                title = %record.title,
                executable = %record.executable,
                state = %record.state,
                snap = ?record.snap_type
            );
        }
        info!(event = "core.capture.completed", count = records.len());
        records
    }

    fn record_for(
        &self,
        window: &WindowSnapshot,
        monitors: &[MonitorDescriptor],
        tab_source: &dyn TabSource,
        include_tabs: bool,
    ) -> Option<WindowRecord> {
        let Some(executable) = window.process_path() else {
            debug!(
                event = "core.capture.process_unresolved",
                handle = %window.handle,
                title = %window.title
            );
            return None;
        };

        let monitor = nearest_monitor(monitors, window.rect);
        let snap_type = match (window.state, monitors.get(monitor)) {
            (WindowState::Normal, Some(m)) => classify(window.rect, m.work_area, self.snap_tolerance),
            _ => None,
        };

        let mut record = WindowRecord::new(
            executable,
            window.title.clone(),
            window.rect,
            window.state,
            monitor,
            snap_type,
        );

        if include_tabs && tab_source.supports(executable) {
            record.tabs = tab_source.tabs(&window.title, executable);
        }

        Some(record)
    }
}

/// Keep the four windows closest to the top-left, ordered by `(y, x)`.
///
/// Backs the "save 4-quadrant layout" action.
pub fn quadrant_selection(mut records: Vec<WindowRecord>) -> Vec<WindowRecord> {
    records.sort_by_key(|r| (r.bounds.y, r.bounds.x));
    records.truncate(4);
    records
}
