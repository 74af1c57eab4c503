//! Error types for obsolint operations.
//!
//! This module defines [`ObsolintError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The validator itself never fails: missing keys, constraint mismatches
//!   and inactive rules are silent skips, not errors
//! - Use `ObsolintError` for configuration and driver failures that callers
//!   need to tell apart
//! - Use `anyhow::Error` (via `ObsolintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for obsolint operations.
#[derive(Debug, Error)]
pub enum ObsolintError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The host cancelled the run between two analysis units.
    #[error("Analysis cancelled after {completed} unit(s)")]
    Cancelled { completed: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for obsolint operations.
pub type Result<T> = std::result::Result<T, ObsolintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = ObsolintError::ConfigNotFound {
            path: PathBuf::from("/foo/.obsolint/config.yml"),
        };
        assert!(err.to_string().contains("/foo/.obsolint/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ObsolintError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = ObsolintError::ConfigValidationError {
            message: "bad glob".into(),
        };
        assert!(err.to_string().contains("bad glob"));
    }

    #[test]
    fn cancelled_displays_completed_count() {
        let err = ObsolintError::Cancelled { completed: 3 };
        assert!(err.to_string().contains("3 unit(s)"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ObsolintError = io_err.into();
        assert!(matches!(err, ObsolintError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: ObsolintError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ObsolintError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
