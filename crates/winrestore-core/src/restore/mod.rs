//! Putting saved windows back where they were.

mod errors;
mod handler;
mod placement;
mod tabs;
mod types;

pub use errors::RestoreError;
pub use handler::LayoutRestorer;
pub use placement::clamp_to_work_areas;
pub use tabs::restore_tabs;
pub use types::{
    DEFAULT_SESSION_MANAGED_APPS, LaunchedApps, MinSize, RestoreEntry, RestoreOptions,
    RestoreOutcome, RestoreReport,
};
