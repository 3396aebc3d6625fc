//! Selection of the native desktop backend.

use tracing::debug;

use super::backends::UnsupportedDesktop;
#[cfg(windows)]
use super::backends::Win32Desktop;
use super::traits::Desktop;

/// Detect the desktop backend for the current platform.
///
/// Falls back to [`UnsupportedDesktop`] where no native backend exists.
pub fn detect_desktop() -> Box<dyn Desktop> {
    let backend = native_backend().unwrap_or_else(|| Box::new(UnsupportedDesktop));
    debug!(event = "core.desktop.backend_selected", backend = backend.name());
    backend
}

#[cfg(windows)]
fn native_backend() -> Option<Box<dyn Desktop>> {
    Some(Box::new(Win32Desktop))
}

#[cfg(not(windows))]
fn native_backend() -> Option<Box<dyn Desktop>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_desktop_matches_platform() {
        let backend = detect_desktop();
        if cfg!(windows) {
            assert_eq!(backend.name(), "win32");
        } else {
            assert_eq!(backend.name(), "unsupported");
        }
    }
}
