//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use install_eligibility::config::{load_config_file, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("eligibility.yml");
//! fs::write(&path, "identity:\n  domain: corp\n").unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.identity.domain, Some("corp".to_string()));
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config};
pub use schema::{
    EligibilityConfig, IdentityConfig, PropertyNames, DEFAULT_ACCOUNT_NAME_PROPERTY,
    DEFAULT_PASSWORD_PROPERTY,
};
pub use validator::{validate, validate_config, ValidationError};
