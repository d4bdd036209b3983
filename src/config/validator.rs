//! Configuration validation rules.
//!
//! - Property names must be non-empty
//! - Property names must not contain `=` or line breaks
//! - The account and password properties must differ

use crate::config::schema::EligibilityConfig;
use crate::error::{EligibilityError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &EligibilityConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let properties = [
        ("account_name", &config.properties.account_name),
        ("password", &config.properties.password),
    ];

    for (field, name) in properties {
        if name.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-property-name".to_string(),
                message: format!("Property name for '{}' must not be empty", field),
            });
        } else if name.contains(['=', '\n', '\r']) {
            errors.push(ValidationError {
                rule: "invalid-property-name".to_string(),
                message: format!(
                    "Property name for '{}' must not contain '=' or line breaks",
                    field
                ),
            });
        }
    }

    if !config.properties.account_name.is_empty()
        && config.properties.account_name == config.properties.password
    {
        errors.push(ValidationError {
            rule: "duplicate-property-name".to_string(),
            message: format!(
                "Account name and password both read property '{}'",
                config.properties.account_name
            ),
        });
    }

    errors
}

/// Validate a configuration, failing on the first batch of errors.
pub fn validate(config: &EligibilityConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(EligibilityError::ConfigValidationError { message })
}
