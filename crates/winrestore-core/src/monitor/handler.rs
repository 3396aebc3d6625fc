use tracing::{debug, info, warn};

use super::types::MonitorDescriptor;
use crate::desktop::{Desktop, WindowHandle};
use crate::geometry::{Point, Rect};

/// Primary display assumed when the OS reports nothing at all
pub const FALLBACK_PRIMARY_BOUNDS: Rect = Rect {
    x: 0,
    y: 0,
    width: 1920,
    height: 1080,
};

/// List all monitors in OS-native order.
///
/// Never fails: when enumeration errors or yields nothing, returns a single
/// synthetic monitor covering the primary display's last-known bounds.
pub fn list_monitors(desktop: &dyn Desktop) -> Vec<MonitorDescriptor> {
    debug!(event = "core.monitor.list_started");

    match desktop.monitors() {
        Ok(monitors) if !monitors.is_empty() => {
            debug!(event = "core.monitor.list_completed", count = monitors.len());
            monitors
        }
        Ok(_) => {
            warn!(event = "core.monitor.list_empty", fallback = "primary");
            vec![synthetic_primary(desktop)]
        }
        Err(e) => {
            warn!(
                event = "core.monitor.list_failed",
                error = %e,
                fallback = "primary"
            );
            vec![synthetic_primary(desktop)]
        }
    }
}

fn synthetic_primary(desktop: &dyn Desktop) -> MonitorDescriptor {
    let bounds = desktop.primary_bounds().unwrap_or(FALLBACK_PRIMARY_BOUNDS);
    info!(event = "core.monitor.synthetic_primary", bounds = %bounds);
    MonitorDescriptor {
        index: 0,
        bounds,
        work_area: bounds,
        is_primary: true,
    }
}

/// Index of the first monitor whose bounds contain `point`, or 0 (primary).
pub fn monitor_containing(monitors: &[MonitorDescriptor], point: Point) -> usize {
    monitors
        .iter()
        .position(|m| m.bounds.contains_point(point))
        .unwrap_or(0)
}

/// Index of the monitor nearest to `rect`.
///
/// The monitor with the largest overlap wins; when the rectangle is entirely
/// off-screen, the monitor closest to its center. Ties go to the earlier monitor.
pub fn nearest_monitor(monitors: &[MonitorDescriptor], rect: Rect) -> usize {
    let mut best: Option<(usize, i64)> = None;
    for (i, monitor) in monitors.iter().enumerate() {
        let overlap = monitor.bounds.intersection_area(&rect);
        if overlap > 0 && best.is_none_or(|(_, area)| overlap > area) {
            best = Some((i, overlap));
        }
    }
    if let Some((index, _)) = best {
        return index;
    }

    let center = rect.center();
    monitors
        .iter()
        .enumerate()
        .min_by_key(|(_, m)| m.bounds.distance_squared_to(center))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Index of the monitor nearest to a live window; 0 if the window is gone.
pub fn monitor_for_window(desktop: &dyn Desktop, handle: WindowHandle) -> usize {
    let monitors = list_monitors(desktop);
    match desktop.window(handle) {
        Ok(window) => nearest_monitor(&monitors, window.rect),
        Err(e) => {
            debug!(
                event = "core.monitor.window_lookup_failed",
                handle = %handle,
                error = %e
            );
            0
        }
    }
}
