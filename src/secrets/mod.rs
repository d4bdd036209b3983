//! Secret detection for custom-action properties.
//!
//! Installer properties routinely carry the service account password. This
//! module decides which property keys hold secrets so their values can be
//! redacted from logs and command output:
//!
//! - [`SecretPattern`] - Defines a pattern for identifying secret keys
//! - [`SecretMatcher`] - Matches property names against secret patterns
//! - [`BUILTIN_PATTERNS`] - Built-in patterns for common secrets
//! - [`REDACTED`] - The replacement shown for secret values
//!
//! # Example
//!
//! ```
//! use install_eligibility::secrets::SecretMatcher;
//!
//! let matcher = SecretMatcher::with_builtins();
//! assert!(matcher.is_secret("DDAGENTUSER_PASSWORD"));
//! assert!(!matcher.is_secret("DDAGENTUSER_NAME"));
//! assert_eq!(matcher.redact("DDAGENTUSER_PASSWORD", "hunter2"), "[REDACTED]");
//! assert_eq!(matcher.redact("DDAGENTUSER_NAME", "corp\\svc"), "corp\\svc");
//! ```

pub mod pattern;

pub use pattern::{SecretMatcher, SecretPattern, BUILTIN_PATTERNS, REDACTED};
