//! Error types for quickadd.
//!
//! Parsing itself never fails; these errors cover the ambient surface:
//! configuration files, command-line arguments and output serialization.

use thiserror::Error;

/// Errors produced outside the parser.
#[derive(Debug, Error)]
pub enum QuickAddError {
    /// Configuration could not be located, read, or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("serialization error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A command-line value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QuickAddError::Config("missing HOME".to_string());
        assert_eq!(err.to_string(), "configuration error: missing HOME");

        let err = QuickAddError::InvalidArgument("--now".to_string());
        assert_eq!(err.to_string(), "invalid argument: --now");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: QuickAddError = io.into();
        assert!(matches!(err, QuickAddError::Io(_)));
    }
}
