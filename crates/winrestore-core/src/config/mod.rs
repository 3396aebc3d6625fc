//! User configuration loaded from `config.toml`.

mod errors;
mod loading;
mod types;

pub use errors::ConfigError;
pub use loading::{CONFIG_FILE_ENV, config_file_path, load_config, load_config_from};
pub use types::{CaptureConfig, RestoreConfig, WinrestoreConfig};
