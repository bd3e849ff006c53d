use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upload content rejected by the signature whitelist
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Content validation error types
///
/// Both kinds are terminal for the call that raised them: there is no retry
/// and no partial success. The caller decides what rejection looks like to
/// the end user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Probe shorter than the minimum signature length
    #[error("file too small to carry an image signature ({len} bytes)")]
    TooSmall { len: usize },

    /// Probe matches none of the whitelisted image signatures
    #[error("content not recognized as an allowed image type")]
    UnrecognizedFormat,
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for content validation
pub type ValidationResult<T> = Result<T, ValidationError>;

// Additional From implementations for common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(format!("JSON export failed: {}", err))
    }
}
