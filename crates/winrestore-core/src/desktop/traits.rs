//! Desktop backend trait definition.

use crate::desktop::errors::DesktopError;
use crate::desktop::types::{KeyStroke, WindowHandle, WindowSnapshot};
use crate::geometry::Rect;
use crate::monitor::MonitorDescriptor;

/// Trait defining the interface to a live desktop session.
///
/// Every query reads the current OS state; implementations must not cache
/// monitors or windows between calls, since both change underneath us
/// (hot-plug, windows closing, processes starting).
pub trait Desktop: Send + Sync {
    /// The canonical name of this backend (e.g., "win32").
    fn name(&self) -> &'static str;

    /// Monitors in OS-native order, with their work areas.
    fn monitors(&self) -> Result<Vec<MonitorDescriptor>, DesktopError>;

    /// Last-known bounds of the primary display, if the OS reports one.
    fn primary_bounds(&self) -> Option<Rect>;

    /// All top-level windows in z-order, materialized in one traversal.
    fn windows(&self) -> Result<Vec<WindowSnapshot>, DesktopError>;

    /// Re-read a single window.
    fn window(&self, handle: WindowHandle) -> Result<WindowSnapshot, DesktopError>;

    /// Restore a minimized or maximized window to its normal state.
    fn restore(&self, handle: WindowHandle) -> Result<(), DesktopError>;

    fn maximize(&self, handle: WindowHandle) -> Result<(), DesktopError>;

    /// Bring a window to the foreground.
    fn focus(&self, handle: WindowHandle) -> Result<(), DesktopError>;

    /// Set position and size without activating the window or changing z-order.
    fn move_window(&self, handle: WindowHandle, rect: Rect) -> Result<(), DesktopError>;

    /// Send synthetic keyboard input to whatever window has focus.
    fn send_keys(&self, keys: &[KeyStroke]) -> Result<(), DesktopError>;
}
