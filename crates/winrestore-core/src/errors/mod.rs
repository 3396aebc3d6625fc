use std::error::Error;

/// Base trait for all winrestore errors
pub trait WinrestoreError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type WinrestoreResult<T> = Result<T, Box<dyn WinrestoreError>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("sample")]
    struct SampleError;

    impl WinrestoreError for SampleError {
        fn error_code(&self) -> &'static str {
            "SAMPLE"
        }
    }

    #[test]
    fn test_winrestore_result() {
        let _result: WinrestoreResult<i32> = Ok(42);
    }

    #[test]
    fn test_default_is_not_user_error() {
        let boxed: Box<dyn WinrestoreError> = Box::new(SampleError);
        assert_eq!(boxed.error_code(), "SAMPLE");
        assert!(!boxed.is_user_error());
    }
}
