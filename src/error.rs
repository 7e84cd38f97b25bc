//! Error types for stepform operations.
//!
//! This module defines [`FormError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Validation failures inside a session are state, not errors: they block
//!   advancement and render in the error summary
//! - Use `FormError` for failures that end a command
//! - Use `anyhow::Error` (via `FormError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stepform operations.
#[derive(Debug, Error)]
pub enum FormError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration or values file.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The form could not be completed because entries are invalid.
    #[error("Please check your entries: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    /// A field key that is not part of the form.
    #[error("Unknown field: {name}")]
    UnknownField { name: String },

    /// A step index outside the step registry.
    #[error("Step {index} is out of range (form has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    /// The submitted payload could not be encoded.
    #[error("Failed to encode payload: {message}")]
    PayloadEncoding { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for stepform operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = FormError::ConfigNotFound {
            path: PathBuf::from("/foo/stepform.yml"),
        };
        assert!(err.to_string().contains("/foo/stepform.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = FormError::ConfigParseError {
            path: PathBuf::from("/values.json"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/values.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn validation_failed_lists_every_error() {
        let err = FormError::ValidationFailed {
            errors: vec![
                "First name: First name is required".into(),
                "Email: Invalid email address".into(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Please check your entries"));
        assert!(msg.contains("First name is required; Email: Invalid email address"));
    }

    #[test]
    fn unknown_field_displays_name() {
        let err = FormError::UnknownField {
            name: "middleName".into(),
        };
        assert!(err.to_string().contains("middleName"));
    }

    #[test]
    fn step_out_of_range_displays_bounds() {
        let err = FormError::StepOutOfRange { index: 7, len: 3 };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains("3 steps"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FormError = io_err.into();
        assert!(matches!(err, FormError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: FormError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, FormError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
