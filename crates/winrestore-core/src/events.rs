//! App-level lifecycle events shared by every entry point.

use tracing::{error, info};

use crate::errors::WinrestoreError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        os = std::env::consts::OS
    );
}

pub fn log_app_error(error: &dyn WinrestoreError) {
    error!(
        event = "core.app.error_occurred",
        error_code = error.error_code(),
        error_message = %error,
        user_error = error.is_user_error()
    );
}
