use crate::desktop::DesktopError;
use crate::errors::WinrestoreError;
use crate::launch::LaunchError;

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("Could not launch: {0}")]
    Launch(#[from] LaunchError),

    #[error("Window not found after launch: '{title}' ({executable}, {attempts} attempts)")]
    WindowNotFoundAfterLaunch {
        executable: String,
        title: String,
        attempts: u32,
    },

    #[error("Window operation failed: {0}")]
    Desktop(#[from] DesktopError),
}

impl WinrestoreError for RestoreError {
    fn error_code(&self) -> &'static str {
        match self {
            RestoreError::Launch(_) => "LAUNCH_FAILED",
            RestoreError::WindowNotFoundAfterLaunch { .. } => "WINDOW_NOT_FOUND_AFTER_LAUNCH",
            RestoreError::Desktop(_) => "PLACEMENT_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            RestoreError::Launch(e) => e.is_user_error(),
            _ => false,
        }
    }
}
