use crate::errors::WinrestoreError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Layout name cannot be empty")]
    InvalidName,

    #[error("Refusing to save layout '{name}' with no windows")]
    EmptyLayout { name: String },

    #[error("Layout '{name}' not found")]
    NotFound { name: String },

    #[error("A layout named '{name}' already exists")]
    AlreadyExists { name: String },

    #[error("Failed to read layouts file ({path}): {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to save layouts: {message}")]
    SaveFailed { message: String },
}

impl WinrestoreError for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            StoreError::InvalidName => "INVALID_LAYOUT_NAME",
            StoreError::EmptyLayout { .. } => "EMPTY_LAYOUT",
            StoreError::NotFound { .. } => "LAYOUT_NOT_FOUND",
            StoreError::AlreadyExists { .. } => "LAYOUT_ALREADY_EXISTS",
            StoreError::ReadFailed { .. } => "LAYOUT_READ_FAILED",
            StoreError::SaveFailed { .. } => "LAYOUT_SAVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidName
                | StoreError::EmptyLayout { .. }
                | StoreError::NotFound { .. }
                | StoreError::AlreadyExists { .. }
        )
    }
}
