use super::types::MinSize;
use crate::geometry::Rect;

/// Fit a saved rectangle onto the current monitors.
///
/// The minimum size is enforced first. If the result still intersects some
/// work area it is returned as-is; otherwise it is capped to the work area of
/// `saved_monitor` (or the first one when that index is gone) and centered there.
/// With no work areas the rectangle is returned unchanged.
pub fn clamp_to_work_areas(
    rect: Rect,
    saved_monitor: usize,
    work_areas: &[Rect],
    min: MinSize,
) -> Rect {
    let Some(fallback) = work_areas.first() else {
        return rect;
    };

    let sized = Rect {
        width: rect.width.max(min.width),
        height: rect.height.max(min.height),
        ..rect
    };
    if work_areas.iter().any(|wa| wa.intersects(&sized)) {
        return sized;
    }

    let wa = work_areas.get(saved_monitor).unwrap_or(fallback);
    let width = sized.width.min(wa.width.max(min.width));
    let height = sized.height.min(wa.height.max(min.height));
    Rect {
        x: wa.x + ((wa.width - width) / 2).max(0),
        y: wa.y + ((wa.height - height) / 2).max(0),
        width,
        height,
    }
}
