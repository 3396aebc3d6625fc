mod filter;
mod handler;
mod types;

pub use filter::{
    DEFAULT_EXCLUDED_PROCESSES, DEFAULT_EXCLUDED_TITLES, DEFAULT_OWN_DIALOG_TITLES,
    DEFAULT_OWN_PROCESS_NAMES, Exclusion, WindowFilter,
};
pub use handler::{WindowEnumerator, quadrant_selection};
pub use types::{BrowserTab, WindowRecord, WindowState};
