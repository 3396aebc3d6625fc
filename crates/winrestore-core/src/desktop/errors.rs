use crate::desktop::WindowHandle;
use crate::errors::WinrestoreError;

#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    #[error("Failed to enumerate windows: {message}")]
    EnumerationFailed { message: String },

    #[error("Failed to enumerate monitors: {message}")]
    MonitorEnumerationFailed { message: String },

    #[error("Window {handle} no longer exists")]
    WindowGone { handle: WindowHandle },

    #[error("{operation} failed for window {handle}: {message}")]
    OperationFailed {
        operation: &'static str,
        handle: WindowHandle,
        message: String,
    },

    #[error("Synthetic input failed: {message}")]
    InputFailed { message: String },

    #[error("Window management is not supported on {platform}")]
    Unsupported { platform: &'static str },
}

impl WinrestoreError for DesktopError {
    fn error_code(&self) -> &'static str {
        match self {
            DesktopError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            DesktopError::MonitorEnumerationFailed { .. } => "MONITOR_ENUMERATION_FAILED",
            DesktopError::WindowGone { .. } => "WINDOW_GONE",
            DesktopError::OperationFailed { .. } => "WINDOW_OPERATION_FAILED",
            DesktopError::InputFailed { .. } => "INPUT_FAILED",
            DesktopError::Unsupported { .. } => "DESKTOP_UNSUPPORTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, DesktopError::Unsupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_window_gone_display() {
        let error = DesktopError::WindowGone {
            handle: WindowHandle(0x10),
        };
        assert_eq!(error.to_string(), "Window 0x10 no longer exists");
        assert_eq!(error.error_code(), "WINDOW_GONE");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_operation_failed_display() {
        let error = DesktopError::OperationFailed {
            operation: "SetWindowPos",
            handle: WindowHandle(0x20),
            message: "access denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "SetWindowPos failed for window 0x20: access denied"
        );
        assert_eq!(error.error_code(), "WINDOW_OPERATION_FAILED");
    }

    #[test]
    fn test_unsupported_is_user_error() {
        let error = DesktopError::Unsupported { platform: "linux" };
        assert_eq!(
            error.to_string(),
            "Window management is not supported on linux"
        );
        assert!(error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DesktopError>();
    }

    #[test]
    fn test_error_source() {
        let error = DesktopError::EnumerationFailed {
            message: "test".to_string(),
        };
        assert!(error.source().is_none());
    }
}
