//! Snap zone detection and its inverse.
//!
//! Pure geometry: no OS access beyond the rectangles handed in.

mod classifier;
mod types;

pub use classifier::{DEFAULT_SNAP_TOLERANCE, classify, zone_rect};
pub use types::SnapZone;
