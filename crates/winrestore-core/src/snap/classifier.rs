use super::types::SnapZone;
use crate::geometry::Rect;

/// Pixel slack allowed when matching a rectangle against a zone.
pub const DEFAULT_SNAP_TOLERANCE: i32 = 24;

/// Classify `rect` into a snap zone of `work_area`, if it matches one within `tolerance`.
///
/// Halves require one edge plus a full opposite dimension; quarters require two
/// edges plus half of both dimensions, so the two groups cannot both match.
///
/// Half and full dimensions are only told apart when each work-area dimension
/// exceeds `2 * tolerance + 1` (50px at the default tolerance). On a smaller
/// work area `classify(zone_rect(z, wa), wa)` can return a different zone.
pub fn classify(rect: Rect, work_area: Rect, tolerance: i32) -> Option<SnapZone> {
    let near = |a: i32, b: i32| (a - b).abs() <= tolerance;

    let left = near(rect.x, work_area.x);
    let right = near(rect.right(), work_area.right());
    let top = near(rect.y, work_area.y);
    let bottom = near(rect.bottom(), work_area.bottom());
    let half_w = near(rect.width, work_area.width / 2);
    let half_h = near(rect.height, work_area.height / 2);
    let full_w = near(rect.width, work_area.width);
    let full_h = near(rect.height, work_area.height);

    if left && full_h && half_w {
        Some(SnapZone::Left)
    } else if right && full_h && half_w {
        Some(SnapZone::Right)
    } else if top && full_w && half_h {
        Some(SnapZone::Top)
    } else if bottom && full_w && half_h {
        Some(SnapZone::Bottom)
    } else if left && top && half_w && half_h {
        Some(SnapZone::TopLeft)
    } else if right && top && half_w && half_h {
        Some(SnapZone::TopRight)
    } else if left && bottom && half_w && half_h {
        Some(SnapZone::BottomLeft)
    } else if right && bottom && half_w && half_h {
        Some(SnapZone::BottomRight)
    } else {
        None
    }
}

/// Rectangle of `zone` inside `work_area`.
///
/// The first half gets `dimension / 2` (at least 1) and the second half the
/// remainder, so opposite zones tile the work area exactly.
pub fn zone_rect(zone: SnapZone, work_area: Rect) -> Rect {
    let wa = work_area;
    let half_w = (wa.width / 2).max(1);
    let half_h = (wa.height / 2).max(1);
    let rest_w = wa.width - half_w;
    let rest_h = wa.height - half_h;

    match zone {
        SnapZone::Left => Rect::new(wa.x, wa.y, half_w, wa.height),
        SnapZone::Right => Rect::new(wa.x + half_w, wa.y, rest_w, wa.height),
        SnapZone::Top => Rect::new(wa.x, wa.y, wa.width, half_h),
        SnapZone::Bottom => Rect::new(wa.x, wa.y + half_h, wa.width, rest_h),
        SnapZone::TopLeft => Rect::new(wa.x, wa.y, half_w, half_h),
        SnapZone::TopRight => Rect::new(wa.x + half_w, wa.y, rest_w, half_h),
        SnapZone::BottomLeft => Rect::new(wa.x, wa.y + half_h, half_w, rest_h),
        SnapZone::BottomRight => Rect::new(wa.x + half_w, wa.y + half_h, rest_w, rest_h),
    }
}
