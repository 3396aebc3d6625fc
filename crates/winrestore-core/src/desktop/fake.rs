//! In-memory desktop for tests.
//!
//! Holds scripted monitors and windows, applies mutating calls to its own
//! state and records them so tests can assert on what the core did.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::desktop::errors::DesktopError;
use crate::desktop::traits::Desktop;
use crate::desktop::types::{KeyStroke, ProcessInfo, WindowHandle, WindowSnapshot};
use crate::geometry::Rect;
use crate::monitor::MonitorDescriptor;
use crate::window::WindowState;

/// A mutating call observed by [`FakeDesktop`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopCall {
    Restore(WindowHandle),
    Maximize(WindowHandle),
    Focus(WindowHandle),
    Move(WindowHandle, Rect),
    SendKeys(Vec<KeyStroke>),
}

/// Builder for a scripted window
#[derive(Debug, Clone)]
pub struct FakeWindow {
    snapshot: WindowSnapshot,
}

impl FakeWindow {
    /// A visible, captioned, normal window owned by `executable`.
    pub fn new(executable: &str, title: &str, rect: Rect) -> Self {
        Self {
            snapshot: WindowSnapshot {
                handle: WindowHandle(0),
                title: title.to_string(),
                visible: true,
                tool_window: false,
                has_caption: true,
                rect,
                state: WindowState::Normal,
                process: Some(ProcessInfo::from_path(executable)),
            },
        }
    }

    pub fn with_state(mut self, state: WindowState) -> Self {
        self.snapshot.state = state;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.snapshot.visible = false;
        self
    }

    pub fn tool_window(mut self) -> Self {
        self.snapshot.tool_window = true;
        self
    }

    pub fn without_caption(mut self) -> Self {
        self.snapshot.has_caption = false;
        self
    }

    /// Simulates an access-denied or exited owning process.
    pub fn without_process(mut self) -> Self {
        self.snapshot.process = None;
        self
    }
}

#[derive(Debug)]
struct FakeState {
    monitors: Vec<MonitorDescriptor>,
    fail_monitors: bool,
    fail_windows: bool,
    primary: Option<Rect>,
    windows: Vec<WindowSnapshot>,
    calls: Vec<DesktopCall>,
    enumerations: usize,
    next_handle: isize,
}

/// Scripted desktop. Clones share state, so a launcher can add windows to
/// the same desktop the restorer is querying.
#[derive(Debug, Clone)]
pub struct FakeDesktop {
    state: Arc<Mutex<FakeState>>,
}

impl Default for FakeDesktop {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDesktop {
    /// An empty desktop with no monitors.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                monitors: Vec::new(),
                fail_monitors: false,
                fail_windows: false,
                primary: None,
                windows: Vec::new(),
                calls: Vec::new(),
                enumerations: 0,
                next_handle: 0x100,
            })),
        }
    }

    /// A single 1920x1080 monitor with a 40px taskbar at the bottom.
    pub fn single_monitor() -> Self {
        Self::new().with_monitor(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1040))
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn with_monitor(self, bounds: Rect, work_area: Rect) -> Self {
        {
            let mut state = self.lock();
            let index = state.monitors.len();
            if index == 0 {
                state.primary = Some(bounds);
            }
            state.monitors.push(MonitorDescriptor {
                index,
                bounds,
                work_area,
                is_primary: index == 0,
            });
        }
        self
    }

    pub fn with_primary_bounds(self, bounds: Option<Rect>) -> Self {
        self.lock().primary = bounds;
        self
    }

    /// Make monitor enumeration fail.
    pub fn failing_monitors(self) -> Self {
        self.lock().fail_monitors = true;
        self
    }

    /// Make window enumeration fail.
    pub fn failing_windows(self) -> Self {
        self.lock().fail_windows = true;
        self
    }

    /// Add a window on top of the z-order's tail and return its handle.
    pub fn add_window(&self, window: FakeWindow) -> WindowHandle {
        let mut state = self.lock();
        let handle = WindowHandle(state.next_handle);
        state.next_handle += 1;
        let mut snapshot = window.snapshot;
        snapshot.handle = handle;
        state.windows.push(snapshot);
        handle
    }

    pub fn remove_monitor(&self, index: usize) {
        let mut state = self.lock();
        if index < state.monitors.len() {
            state.monitors.remove(index);
            for (i, monitor) in state.monitors.iter_mut().enumerate() {
                monitor.index = i;
            }
        }
    }

    pub fn rect_of(&self, handle: WindowHandle) -> Option<Rect> {
        self.lock()
            .windows
            .iter()
            .find(|w| w.handle == handle)
            .map(|w| w.rect)
    }

    pub fn state_of(&self, handle: WindowHandle) -> Option<WindowState> {
        self.lock()
            .windows
            .iter()
            .find(|w| w.handle == handle)
            .map(|w| w.state)
    }

    pub fn calls(&self) -> Vec<DesktopCall> {
        self.lock().calls.clone()
    }

    /// Number of completed `windows()` traversals.
    pub fn enumerations(&self) -> usize {
        self.lock().enumerations
    }

    pub fn window_count(&self) -> usize {
        self.lock().windows.len()
    }

    fn update<F>(&self, handle: WindowHandle, call: DesktopCall, f: F) -> Result<(), DesktopError>
    where
        F: FnOnce(&mut WindowSnapshot),
    {
        let mut state = self.lock();
        state.calls.push(call);
        let window = state
            .windows
            .iter_mut()
            .find(|w| w.handle == handle)
            .ok_or(DesktopError::WindowGone { handle })?;
        f(window);
        Ok(())
    }
}

impl Desktop for FakeDesktop {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn monitors(&self) -> Result<Vec<MonitorDescriptor>, DesktopError> {
        let state = self.lock();
        if state.fail_monitors {
            return Err(DesktopError::MonitorEnumerationFailed {
                message: "scripted failure".to_string(),
            });
        }
        Ok(state.monitors.clone())
    }

    fn primary_bounds(&self) -> Option<Rect> {
        self.lock().primary
    }

    fn windows(&self) -> Result<Vec<WindowSnapshot>, DesktopError> {
        let mut state = self.lock();
        if state.fail_windows {
            return Err(DesktopError::EnumerationFailed {
                message: "scripted failure".to_string(),
            });
        }
        state.enumerations += 1;
        Ok(state.windows.clone())
    }

    fn window(&self, handle: WindowHandle) -> Result<WindowSnapshot, DesktopError> {
        self.lock()
            .windows
            .iter()
            .find(|w| w.handle == handle)
            .cloned()
            .ok_or(DesktopError::WindowGone { handle })
    }

    fn restore(&self, handle: WindowHandle) -> Result<(), DesktopError> {
        self.update(handle, DesktopCall::Restore(handle), |w| {
            w.state = WindowState::Normal
        })
    }

    fn maximize(&self, handle: WindowHandle) -> Result<(), DesktopError> {
        self.update(handle, DesktopCall::Maximize(handle), |w| {
            w.state = WindowState::Maximized
        })
    }

    fn focus(&self, handle: WindowHandle) -> Result<(), DesktopError> {
        self.update(handle, DesktopCall::Focus(handle), |_| {})
    }

    fn move_window(&self, handle: WindowHandle, rect: Rect) -> Result<(), DesktopError> {
        self.update(handle, DesktopCall::Move(handle, rect), |w| w.rect = rect)
    }

    fn send_keys(&self, keys: &[KeyStroke]) -> Result<(), DesktopError> {
        self.lock().calls.push(DesktopCall::SendKeys(keys.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_desktop_assigns_distinct_handles() {
        let desktop = FakeDesktop::single_monitor();
        let a = desktop.add_window(FakeWindow::new("a.exe", "A", Rect::new(0, 0, 10, 10)));
        let b = desktop.add_window(FakeWindow::new("b.exe", "B", Rect::new(0, 0, 10, 10)));
        assert_ne!(a, b);
        assert_eq!(desktop.window_count(), 2);
    }

    #[test]
    fn fake_desktop_applies_moves() {
        let desktop = FakeDesktop::single_monitor();
        let handle = desktop.add_window(FakeWindow::new("a.exe", "A", Rect::new(0, 0, 10, 10)));
        desktop.move_window(handle, Rect::new(5, 5, 50, 50)).unwrap();
        assert_eq!(desktop.rect_of(handle), Some(Rect::new(5, 5, 50, 50)));
        assert_eq!(
            desktop.calls(),
            vec![DesktopCall::Move(handle, Rect::new(5, 5, 50, 50))]
        );
    }

    #[test]
    fn fake_desktop_counts_enumerations() {
        let desktop = FakeDesktop::single_monitor();
        desktop.windows().unwrap();
        desktop.windows().unwrap();
        assert_eq!(desktop.enumerations(), 2);
    }

    #[test]
    fn fake_desktop_unknown_handle_is_gone() {
        let desktop = FakeDesktop::single_monitor();
        assert!(matches!(
            desktop.restore(WindowHandle(1)),
            Err(DesktopError::WindowGone { .. })
        ));
    }
}
