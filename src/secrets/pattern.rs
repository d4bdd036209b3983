//! Secret pattern matching.
//!
//! Property names are matched case-insensitively against a set of regular
//! expressions. Callers can add exact names for properties that hold a
//! secret under a name the built-ins would not catch.

use regex::Regex;

/// Replacement text for redacted values.
pub const REDACTED: &str = "[REDACTED]";

/// A pattern that identifies secret properties.
#[derive(Debug, Clone)]
pub struct SecretPattern {
    /// Name of this pattern (for debugging).
    pub name: String,
    /// Regex pattern to match property names.
    pub key_pattern: Regex,
}

/// Built-in patterns for common secrets.
///
/// Each tuple contains (name, regex_pattern).
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("password", r"(?i)^.*_?(PASSWORD|PASSWD|PWD)$"),
    ("secret", r"(?i)^.*_?(SECRET|SECRET_KEY)$"),
    ("token", r"(?i)^.*_?(TOKEN|ACCESS_TOKEN|AUTH_TOKEN)$"),
    ("api_key", r"(?i)^.*_?(API_?KEY|APIKEY)$"),
    ("credential", r"(?i)^.*_?CREDENTIALS?$"),
];

/// Matches property names against secret patterns.
///
/// # Example
///
/// ```
/// use install_eligibility::secrets::SecretMatcher;
///
/// let matcher = SecretMatcher::with_builtins_and_custom(&["AGENT_PASSPHRASE".to_string()]);
///
/// assert!(matcher.is_secret("AGENT_PASSPHRASE"));
/// assert!(matcher.is_secret("APIKEY"));
/// assert!(!matcher.is_secret("PROJECTLOCATION"));
/// ```
#[derive(Debug, Clone)]
pub struct SecretMatcher {
    patterns: Vec<SecretPattern>,
}

impl SecretMatcher {
    /// Create a matcher with built-in patterns.
    pub fn with_builtins() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .filter_map(|(name, pattern)| {
                Regex::new(pattern).ok().map(|key_pattern| SecretPattern {
                    name: name.to_string(),
                    key_pattern,
                })
            })
            .collect();

        Self { patterns }
    }

    /// Create a matcher with custom patterns.
    pub fn new(patterns: Vec<SecretPattern>) -> Self {
        Self { patterns }
    }

    /// Create a matcher with built-in patterns plus custom exact matches.
    ///
    /// Custom names match case-insensitively, the way MSI property names
    /// are compared by the installer host.
    pub fn with_builtins_and_custom(custom_names: &[String]) -> Self {
        let mut matcher = Self::with_builtins();

        for name in custom_names {
            if let Ok(pattern) = Regex::new(&format!("(?i)^{}$", regex::escape(name))) {
                matcher.add_pattern(SecretPattern {
                    name: format!("custom:{}", name),
                    key_pattern: pattern,
                });
            }
        }

        matcher
    }

    /// Add a custom pattern.
    pub fn add_pattern(&mut self, pattern: SecretPattern) {
        self.patterns.push(pattern);
    }

    /// Check if a property name matches any secret pattern.
    pub fn is_secret(&self, key: &str) -> bool {
        self.patterns.iter().any(|p| p.key_pattern.is_match(key))
    }

    /// Return `value`, or [`REDACTED`] when `key` names a secret.
    pub fn redact<'a>(&self, key: &str, value: &'a str) -> &'a str {
        if self.is_secret(key) {
            REDACTED
        } else {
            value
        }
    }
}

impl Default for SecretMatcher {
    fn default() -> Self {
        Self::with_builtins()
    }
}
