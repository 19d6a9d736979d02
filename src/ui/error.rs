//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal or prompt I/O failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Invalid UI configuration: {0}")]
    InvalidConfig(String),
}

impl From<dialoguer::Error> for UiError {
    fn from(err: dialoguer::Error) -> Self {
        Self::IoError(std::io::Error::other(err))
    }
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err: UiError = std::io::Error::other("tty gone").into();
        assert!(matches!(err, UiError::IoError(_)));
        assert_eq!(err.to_string(), "IO error: tty gone");
    }

    #[test]
    fn test_dialoguer_error_conversion() {
        let err: UiError = dialoguer::Error::IO(std::io::Error::other("closed")).into();
        assert!(matches!(err, UiError::IoError(_)));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            UiError::InvalidConfig("bad backend".into()).to_string(),
            "Invalid UI configuration: bad backend"
        );
    }
}
