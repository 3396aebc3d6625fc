//! Fallback backend for platforms without window management support.

use crate::desktop::errors::DesktopError;
use crate::desktop::traits::Desktop;
use crate::desktop::types::{KeyStroke, WindowHandle, WindowSnapshot};
use crate::geometry::Rect;
use crate::monitor::MonitorDescriptor;

/// Backend whose every operation reports `DesktopError::Unsupported`.
///
/// The core degrades these to empty results, so the CLI stays usable for
/// inspecting and managing saved layouts.
pub struct UnsupportedDesktop;

fn unsupported<T>() -> Result<T, DesktopError> {
    Err(DesktopError::Unsupported {
        platform: std::env::consts::OS,
    })
}

impl Desktop for UnsupportedDesktop {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn monitors(&self) -> Result<Vec<MonitorDescriptor>, DesktopError> {
        unsupported()
    }

    fn primary_bounds(&self) -> Option<Rect> {
        None
    }

    fn windows(&self) -> Result<Vec<WindowSnapshot>, DesktopError> {
        unsupported()
    }

    fn window(&self, _handle: WindowHandle) -> Result<WindowSnapshot, DesktopError> {
        unsupported()
    }

    fn restore(&self, _handle: WindowHandle) -> Result<(), DesktopError> {
        unsupported()
    }

    fn maximize(&self, _handle: WindowHandle) -> Result<(), DesktopError> {
        unsupported()
    }

    fn focus(&self, _handle: WindowHandle) -> Result<(), DesktopError> {
        unsupported()
    }

    fn move_window(&self, _handle: WindowHandle, _rect: Rect) -> Result<(), DesktopError> {
        unsupported()
    }

    fn send_keys(&self, _keys: &[KeyStroke]) -> Result<(), DesktopError> {
        unsupported()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WinrestoreError;

    #[test]
    fn unsupported_backend_name() {
        assert_eq!(UnsupportedDesktop.name(), "unsupported");
    }

    #[test]
    fn unsupported_backend_reports_unsupported() {
        let err = UnsupportedDesktop.windows().unwrap_err();
        assert_eq!(err.error_code(), "DESKTOP_UNSUPPORTED");
        assert!(UnsupportedDesktop.monitors().is_err());
        assert!(UnsupportedDesktop.primary_bounds().is_none());
    }
}
