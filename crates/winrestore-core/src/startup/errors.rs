use crate::errors::WinrestoreError;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Startup layout '{name}' not found")]
    LayoutNotFound { name: String },

    #[error("Layout lookup failed: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to read settings file ({path}): {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to save settings: {message}")]
    SaveFailed { message: String },
}

impl WinrestoreError for StartupError {
    fn error_code(&self) -> &'static str {
        match self {
            StartupError::LayoutNotFound { .. } => "STARTUP_LAYOUT_NOT_FOUND",
            StartupError::Store(e) => e.error_code(),
            StartupError::ReadFailed { .. } => "SETTINGS_READ_FAILED",
            StartupError::SaveFailed { .. } => "SETTINGS_SAVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            StartupError::LayoutNotFound { .. } => true,
            StartupError::Store(e) => e.is_user_error(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_layout_not_found_display() {
        let error = StartupError::LayoutNotFound {
            name: "Morning".to_string(),
        };
        assert_eq!(error.to_string(), "Startup layout 'Morning' not found");
        assert_eq!(error.error_code(), "STARTUP_LAYOUT_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_store_error_keeps_code_and_source() {
        let error: StartupError = StoreError::SaveFailed {
            message: "disk full".to_string(),
        }
        .into();
        assert_eq!(error.error_code(), "LAYOUT_SAVE_FAILED");
        assert!(!error.is_user_error());
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StartupError>();
    }
}
