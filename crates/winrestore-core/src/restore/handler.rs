use tracing::{debug, error, info, warn};

use super::errors::RestoreError;
use super::placement::clamp_to_work_areas;
use super::tabs::{pause, restore_tabs};
use super::types::{LaunchedApps, RestoreEntry, RestoreOptions, RestoreOutcome, RestoreReport};
use crate::desktop::{Desktop, WindowHandle};
use crate::geometry::Rect;
use crate::launch::Launcher;
use crate::matcher::find_best;
use crate::monitor::{list_monitors, monitor_for_window};
use crate::snap::zone_rect;
use crate::window::{WindowRecord, WindowState};

/// Restores saved window records onto the live desktop.
///
/// Records are handled one at a time, in order. A failing record never stops
/// the run.
pub struct LayoutRestorer<'a> {
    desktop: &'a dyn Desktop,
    launcher: &'a dyn Launcher,
    options: RestoreOptions,
}

impl<'a> LayoutRestorer<'a> {
    pub fn new(
        desktop: &'a dyn Desktop,
        launcher: &'a dyn Launcher,
        options: RestoreOptions,
    ) -> Self {
        Self {
            desktop,
            launcher,
            options,
        }
    }

    pub fn options(&self) -> &RestoreOptions {
        &self.options
    }

    /// Restore every record and report how many were handled.
    pub fn restore_layout(&self, records: &[WindowRecord]) -> RestoreReport {
        info!(
            event = "core.restore.layout_started",
            count = records.len(),
            desktop = self.desktop.name()
        );

        let mut launched = LaunchedApps::new();
        let mut report = RestoreReport {
            attempted: records.len(),
            ..RestoreReport::default()
        };

        for record in records {
            let entry = match self.restore_window(record, &mut launched) {
                Ok(outcome) => {
                    report.restored += 1;
                    RestoreEntry {
                        executable: record.executable.clone(),
                        title: record.title.clone(),
                        outcome: Some(outcome),
                        error: None,
                    }
                }
                Err(e) => {
                    error!(
                        event = "core.restore.window_failed",
                        executable = %record.executable,
                        title = %record.title,
                        error = %e
                    );
                    RestoreEntry {
                        executable: record.executable.clone(),
                        title: record.title.clone(),
                        outcome: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            report.entries.push(entry);
        }

        info!(
            event = "core.restore.layout_completed",
            attempted = report.attempted,
            restored = report.restored
        );
        report
    }

    /// Restore a single record.
    ///
    /// `launched` tracks session-managed executables already started in this
    /// run so each one is launched at most once.
    pub fn restore_window(
        &self,
        record: &WindowRecord,
        launched: &mut LaunchedApps,
    ) -> Result<RestoreOutcome, RestoreError> {
        if record.state == WindowState::Minimized {
            debug!(
                event = "core.restore.minimized_skipped",
                title = %record.title
            );
            return Ok(RestoreOutcome::SkippedMinimized);
        }

        info!(
            event = "core.restore.window_started",
            executable = %record.executable,
            title = %record.title
        );

        if self.options.is_session_managed(&record.executable) {
            return self.restore_session_app(record, launched);
        }

        let (handle, was_launched) =
            match find_best(self.desktop, &record.executable, &record.title) {
                Some(handle) => (handle, false),
                None => (self.launch_and_wait(record)?, true),
            };

        let snapped = self.place_window(handle, record)?;

        if self.options.restore_tabs && !record.tabs.is_empty() {
            restore_tabs(self.desktop, handle, &record.tabs, &self.options);
        }

        let outcome = RestoreOutcome::Placed {
            launched: was_launched,
            snapped,
        };
        info!(
            event = "core.restore.window_completed",
            executable = %record.executable,
            handle = %handle,
            outcome = %outcome
        );
        Ok(outcome)
    }

    /// Surface-or-launch-once. Never moves or resizes the window.
    fn restore_session_app(
        &self,
        record: &WindowRecord,
        launched: &mut LaunchedApps,
    ) -> Result<RestoreOutcome, RestoreError> {
        if !self.options.restore_session_apps {
            info!(
                event = "core.restore.session_app_skipped",
                title = %record.title,
                reason = "policy"
            );
            return Ok(RestoreOutcome::SkippedByPolicy);
        }

        if let Some(handle) = find_best(self.desktop, &record.executable, &record.title) {
            // Surfacing is cosmetic; a refusal here does not fail the record
            if let Err(e) = self.surface(handle) {
                warn!(
                    event = "core.restore.surface_failed",
                    handle = %handle,
                    error = %e
                );
            } else if self.options.restore_tabs && !record.tabs.is_empty() {
                restore_tabs(self.desktop, handle, &record.tabs, &self.options);
            }
            return Ok(RestoreOutcome::Surfaced);
        }

        if launched.contains(&record.executable) {
            debug!(
                event = "core.restore.session_app_already_launched",
                executable = %record.executable
            );
            return Ok(RestoreOutcome::AlreadyLaunched);
        }

        self.launcher.launch(&record.executable)?;
        launched.insert(&record.executable);
        Ok(RestoreOutcome::LaunchedSessionApp)
    }

    fn surface(&self, handle: WindowHandle) -> Result<(), RestoreError> {
        if self.desktop.window(handle)?.state == WindowState::Minimized {
            self.desktop.restore(handle)?;
        }
        self.desktop.focus(handle)?;
        Ok(())
    }

    /// Launch the record's executable and poll for its window.
    fn launch_and_wait(&self, record: &WindowRecord) -> Result<WindowHandle, RestoreError> {
        self.launcher.launch(&record.executable)?;
        pause(self.options.launch_settle);

        let attempts = self.options.launch_attempts;
        for attempt in 1..=attempts {
            if attempt > 1 {
                pause(self.options.poll_interval);
            }
            if let Some(handle) = find_best(self.desktop, &record.executable, &record.title) {
                debug!(
                    event = "core.restore.launched_window_found",
                    executable = %record.executable,
                    attempt = attempt
                );
                return Ok(handle);
            }
        }

        warn!(
            event = "core.restore.launched_window_missing",
            executable = %record.executable,
            title = %record.title,
            attempts = attempts
        );
        Err(RestoreError::WindowNotFoundAfterLaunch {
            executable: record.executable.clone(),
            title: record.title.clone(),
            attempts,
        })
    }

    /// Move `handle` to the record's position. Returns whether a snap zone was applied.
    fn place_window(
        &self,
        handle: WindowHandle,
        record: &WindowRecord,
    ) -> Result<bool, RestoreError> {
        // A minimized or maximized window ignores position changes
        if self.desktop.window(handle)?.state != WindowState::Normal {
            self.desktop.restore(handle)?;
        }

        let monitors = list_monitors(self.desktop);

        if let Some(zone) = record.snap_type {
            let index = monitor_for_window(self.desktop, handle);
            let work_area = monitors
                .get(index)
                .or(monitors.first())
                .map(|m| m.work_area)
                .unwrap_or(record.bounds);
            let target = zone_rect(zone, work_area);
            debug!(
                event = "core.restore.snap_applied",
                handle = %handle,
                zone = %zone,
                target = %target
            );
            self.desktop.move_window(handle, target)?;
            return Ok(true);
        }

        let work_areas: Vec<Rect> = monitors.iter().map(|m| m.work_area).collect();
        let target =
            clamp_to_work_areas(record.bounds, record.monitor, &work_areas, self.options.min_size);
        if target != record.bounds {
            debug!(
                event = "core.restore.bounds_clamped",
                handle = %handle,
                saved = %record.bounds,
                target = %target
            );
        }
        self.desktop.move_window(handle, target)?;

        if record.state == WindowState::Maximized {
            self.desktop.maximize(handle)?;
        }
        Ok(false)
    }
}
