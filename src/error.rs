//! Error types for segcheck operations.
//!
//! This module defines [`CheckerError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems surface as `CheckerError` and end the run
//! - Probe mechanism failures (`CommandFailed`, `CommandTimedOut`, `Io`) are
//!   caught inside the probe layer and reported as absent components
//! - Use `anyhow::Error` (via `CheckerError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for segcheck operations.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// Check list file not found at the given location.
    #[error("Check list not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the check list file.
    #[error("Failed to parse check list at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid check list structure or values.
    #[error("Invalid check list: {message}")]
    ConfigValidationError { message: String },

    /// The same component is declared more than once.
    #[error("Component '{name}' is declared more than once")]
    DuplicateCheck { name: String },

    /// A string could not be parsed as a version.
    #[error("Invalid version: '{version}'")]
    InvalidVersion { version: String },

    /// An external command could not be run or exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// An external command did not finish within its time bound.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimedOut { command: String, seconds: u64 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for segcheck operations.
pub type Result<T> = std::result::Result<T, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = CheckerError::ConfigNotFound {
            path: PathBuf::from("/foo/checks.yml"),
        };
        assert!(err.to_string().contains("/foo/checks.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = CheckerError::ConfigParseError {
            path: PathBuf::from("/checks.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/checks.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn duplicate_check_displays_name() {
        let err = CheckerError::DuplicateCheck {
            name: "numpy".into(),
        };
        assert!(err.to_string().contains("numpy"));
    }

    #[test]
    fn invalid_version_displays_input() {
        let err = CheckerError::InvalidVersion {
            version: "abc".into(),
        };
        assert_eq!(err.to_string(), "Invalid version: 'abc'");
    }

    #[test]
    fn command_timed_out_displays_command_and_bound() {
        let err = CheckerError::CommandTimedOut {
            command: "python3 -c pass".into(),
            seconds: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("python3 -c pass"));
        assert!(msg.contains("10s"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CheckerError = io_err.into();
        assert!(matches!(err, CheckerError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: CheckerError = anyhow::anyhow!("unexpected").into();
        assert_eq!(err.to_string(), "unexpected");
    }
}
