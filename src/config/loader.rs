//! Configuration file loading.

use crate::config::schema::EligibilityConfig;
use crate::config::validator::validate;
use crate::error::{EligibilityError, Result};
use std::fs;
use std::path::Path;

/// Load, parse, and validate a configuration file.
///
/// # Errors
///
/// - [`EligibilityError::ConfigNotFound`] if the file does not exist
/// - [`EligibilityError::ConfigParseError`] if the YAML is invalid
/// - [`EligibilityError::ConfigValidationError`] if values are unusable
pub fn load_config_file(path: &Path) -> Result<EligibilityConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EligibilityError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EligibilityError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    validate(&config)?;
    Ok(config)
}

/// Load a configuration file if a path was given, otherwise use defaults.
pub fn load_config(path: Option<&Path>) -> Result<EligibilityConfig> {
    match path {
        Some(path) => load_config_file(path),
        None => Ok(EligibilityConfig::default()),
    }
}

/// Parse YAML content into an [`EligibilityConfig`].
///
/// An empty document yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<EligibilityConfig> {
    if content.trim().is_empty() {
        return Ok(EligibilityConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EligibilityError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
