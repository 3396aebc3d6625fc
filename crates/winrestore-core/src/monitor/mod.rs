mod handler;
mod types;

pub use handler::{
    FALLBACK_PRIMARY_BOUNDS, list_monitors, monitor_containing, monitor_for_window,
    nearest_monitor,
};
pub use types::MonitorDescriptor;
