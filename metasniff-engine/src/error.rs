//! Engine error types
//!
//! Sniffing itself is total and never fails. Errors only come from the
//! edges: building a configuration and reading input.

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A charset label that does not name a supported encoding
    #[error("unsupported charset label '{label}'")]
    UnsupportedLabel {
        /// The label as given
        label: String,
    },

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidConfig("prescan limit must be at least 3 bytes".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: prescan limit must be at least 3 bytes"
        );

        let err = EngineError::UnsupportedLabel {
            label: "klingon".into(),
        };
        assert_eq!(err.to_string(), "unsupported charset label 'klingon'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::Io(_)));
        assert!(err.to_string().contains("short read"));
    }
}
