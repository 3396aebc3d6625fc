//! The layout restored automatically at login.

mod errors;
mod handler;
mod persistence;
mod types;

pub use errors::StartupError;
pub use handler::{clear_startup_preset, set_startup_preset, startup_layout, startup_preset};
pub use persistence::{SETTINGS_FILE_ENV, SettingsFile, settings_file_path};
pub use types::Settings;
