use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Information about a monitor/display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorDescriptor {
    /// Position in the enumeration that produced it; not stable across calls
    pub index: usize,
    /// Full display bounds in virtual-screen coordinates
    pub bounds: Rect,
    /// Bounds minus reserved UI such as the taskbar
    pub work_area: Rect,
    /// Whether this is the primary monitor
    pub is_primary: bool,
}
