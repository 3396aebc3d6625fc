use std::time::Duration;

use tracing::{info, warn};

use super::types::RestoreOptions;
use crate::desktop::{Desktop, DesktopError, KeyStroke, WindowHandle};
use crate::window::BrowserTab;

pub(super) fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}

fn open_tabs(
    desktop: &dyn Desktop,
    handle: WindowHandle,
    tabs: &[BrowserTab],
    options: &RestoreOptions,
) -> Result<usize, DesktopError> {
    desktop.focus(handle)?;
    pause(options.tab_open_delay);

    let mut opened = 0;
    for tab in tabs {
        if tab.url.trim().is_empty() {
            continue;
        }

        // The first URL reuses the current tab via the address bar
        if opened == 0 {
            desktop.send_keys(&[KeyStroke::Ctrl('l')])?;
            pause(options.tab_key_delay);
        } else {
            desktop.send_keys(&[KeyStroke::Ctrl('t')])?;
            pause(options.tab_open_delay);
        }
        desktop.send_keys(&[KeyStroke::Text(tab.url.clone()), KeyStroke::Enter])?;
        pause(options.tab_open_delay);
        opened += 1;
    }
    Ok(opened)
}

/// Re-open saved tabs in a browser window by typing into it.
///
/// Best-effort: returns how many tabs were sent, and a failure midway is
/// logged and ends the attempt without affecting the caller.
pub fn restore_tabs(
    desktop: &dyn Desktop,
    handle: WindowHandle,
    tabs: &[BrowserTab],
    options: &RestoreOptions,
) -> usize {
    if tabs.is_empty() {
        return 0;
    }

    match open_tabs(desktop, handle, tabs, options) {
        Ok(opened) => {
            info!(
                event = "core.restore.tabs_completed",
                handle = %handle,
                count = opened
            );
            opened
        }
        Err(e) => {
            warn!(
                event = "core.restore.tabs_failed",
                handle = %handle,
                error = %e
            );
            0
        }
    }
}
