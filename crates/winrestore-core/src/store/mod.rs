//! Named layouts persisted between runs.

mod errors;
mod persistence;
mod traits;
mod types;

pub use errors::StoreError;
pub use persistence::{JsonLayoutStore, PRESETS_FILE_ENV, presets_file_path};
pub use traits::LayoutStore;
pub use types::{Layout, LayoutSummary};
