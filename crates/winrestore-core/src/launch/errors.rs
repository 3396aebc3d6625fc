use crate::errors::WinrestoreError;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Executable not found: '{executable}'")]
    ExecutableNotFound { executable: String },

    #[error("Failed to start '{executable}': {source}")]
    SpawnFailed {
        executable: String,
        #[source]
        source: std::io::Error,
    },
}

impl WinrestoreError for LaunchError {
    fn error_code(&self) -> &'static str {
        match self {
            LaunchError::ExecutableNotFound { .. } => "EXECUTABLE_NOT_FOUND",
            LaunchError::SpawnFailed { .. } => "SPAWN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, LaunchError::ExecutableNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_found_display() {
        let error = LaunchError::ExecutableNotFound {
            executable: r"C:\Apps\gone.exe".to_string(),
        };
        assert_eq!(error.to_string(), r"Executable not found: 'C:\Apps\gone.exe'");
        assert_eq!(error.error_code(), "EXECUTABLE_NOT_FOUND");
        assert!(error.is_user_error());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_spawn_failed_has_source() {
        let error = LaunchError::SpawnFailed {
            executable: "app.exe".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.error_code(), "SPAWN_FAILED");
        assert!(!error.is_user_error());
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LaunchError>();
    }
}
