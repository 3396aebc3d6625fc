//! Capture and restore of desktop window layouts.
//!
//! Capture walks the live windows, keeps the ones a user would recognize as
//! application windows and records where they are. Restore finds (or launches)
//! each application again and puts its window back, adapting to whatever
//! monitors are connected now.

pub mod config;
pub mod desktop;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod launch;
pub mod logging;
pub mod matcher;
pub mod monitor;
pub mod restore;
pub mod snap;
pub mod startup;
pub mod store;
pub mod tabs;
pub mod window;

pub use config::{WinrestoreConfig, load_config};
pub use desktop::{Desktop, detect_desktop};
pub use errors::{WinrestoreError, WinrestoreResult};
pub use geometry::{Point, Rect};
pub use launch::{Launcher, ProcessLauncher};
pub use logging::init_logging;
pub use matcher::find_best;
pub use monitor::{MonitorDescriptor, list_monitors};
pub use restore::{LayoutRestorer, RestoreOptions, RestoreReport};
pub use snap::{SnapZone, classify, zone_rect};
pub use startup::{SettingsFile, StartupError};
pub use store::{JsonLayoutStore, Layout, LayoutStore, LayoutSummary};
pub use tabs::{DevToolsTabSource, NoTabs, TabSource};
pub use window::{WindowEnumerator, WindowRecord, WindowState, quadrant_selection};
