//! Error types for eligibility tooling.
//!
//! The eligibility predicate itself never fails: every combination of
//! inputs maps to a [`Decision`](crate::eligibility::Decision). The errors
//! here cover the surface around it, such as loading configuration and
//! parsing command-line properties.
//!
//! # Error Handling Strategy
//!
//! - Use `EligibilityError` for failures that need distinct handling
//! - Use `anyhow::Error` (via `EligibilityError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for eligibility operations.
#[derive(Debug, Error)]
pub enum EligibilityError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A property assignment was not of the form `KEY=VALUE`.
    #[error("Invalid property '{input}': expected KEY=VALUE")]
    InvalidProperty { input: String },

    /// The account is domain-qualified but no local identity was given.
    #[error("Account '{account}' is domain-qualified but no local domain name is configured")]
    MissingIdentity { account: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for eligibility operations.
pub type Result<T> = std::result::Result<T, EligibilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = EligibilityError::ConfigNotFound {
            path: PathBuf::from("/etc/eligibility.yml"),
        };
        assert!(err.to_string().contains("/etc/eligibility.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = EligibilityError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = EligibilityError::ConfigValidationError {
            message: "password property name is empty".into(),
        };
        assert!(err.to_string().contains("password property name is empty"));
    }

    #[test]
    fn invalid_property_displays_input() {
        let err = EligibilityError::InvalidProperty {
            input: "DDAGENTUSER_NAME".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("DDAGENTUSER_NAME"));
        assert!(msg.contains("KEY=VALUE"));
    }

    #[test]
    fn missing_identity_displays_account() {
        let err = EligibilityError::MissingIdentity {
            account: "corp\\svc".into(),
        };
        assert!(err.to_string().contains("corp\\svc"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EligibilityError = io_err.into();
        assert!(matches!(err, EligibilityError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: EligibilityError = anyhow::anyhow!("unexpected failure").into();
        assert_eq!(err.to_string(), "unexpected failure");
    }
}
