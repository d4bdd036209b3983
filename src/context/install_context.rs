//! Custom-action data.
//!
//! The installer host hands each custom action a block of `KEY=VALUE`
//! properties. [`InstallContext`] holds those properties and answers the two
//! questions the eligibility rules ask of them: which account was
//! configured, and whether a password was supplied.

use crate::config::PropertyNames;
use crate::context::account::{AccountName, AccountProperty};
use crate::error::Result;
use crate::secrets::SecretMatcher;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Installer properties for one custom-action invocation.
///
/// # Supported Formats
///
/// - One property per line: `KEY=VALUE`
/// - Both `\n` and `\r\n` line endings
/// - Values containing `=`: `OPTS=a=b` yields `a=b`
/// - Empty values: `KEY=`
///
/// Values are kept verbatim. Passwords may contain quotes or leading
/// spaces, so nothing is unquoted or trimmed.
///
/// # Example
///
/// ```
/// use install_eligibility::config::PropertyNames;
/// use install_eligibility::context::InstallContext;
///
/// let ctx = InstallContext::parse("DDAGENTUSER_NAME=EBOKSWEB.LOCAL\\ddagentuser_dom");
/// let names = PropertyNames::default();
///
/// let account = ctx.account_name(&names).unwrap();
/// assert_eq!(account.domain.as_deref(), Some("EBOKSWEB.LOCAL"));
/// assert!(!ctx.password_supplied(&names));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct InstallContext {
    values: HashMap<String, String>,
}

impl InstallContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from raw custom-action data.
    pub fn parse(raw: &str) -> Self {
        let mut ctx = Self::new();
        ctx.init(raw);
        ctx
    }

    /// Merge raw custom-action data into this context.
    ///
    /// Later occurrences of a key overwrite earlier ones. Lines that are
    /// not `KEY=VALUE` are skipped.
    pub fn init(&mut self, raw: &str) {
        for (index, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match Self::parse_line(line) {
                Some((key, value)) => {
                    self.values.insert(key, value);
                }
                None => {
                    tracing::warn!(line = index + 1, "Skipping malformed custom action property");
                }
            }
        }
    }

    /// Parse a single line.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), value.to_string()))
    }

    /// Load custom-action data from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Set a property value.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a property value.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether a property is present, even with an empty value.
    pub fn is_present(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context holds no properties.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Property names, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// The configured service account, if one was given and is well formed.
    pub fn account_name(&self, names: &PropertyNames) -> Option<AccountName> {
        self.value(&names.account_name).and_then(AccountName::parse)
    }

    /// The account-name property, telling a missing name from a malformed one.
    pub fn account_property(&self, names: &PropertyNames) -> AccountProperty {
        AccountProperty::from_value(self.value(&names.account_name))
    }

    /// Whether a non-empty password was supplied.
    pub fn password_supplied(&self, names: &PropertyNames) -> bool {
        self.value(&names.password)
            .map(|password| !password.is_empty())
            .unwrap_or(false)
    }

    /// Properties in key order, with secret values redacted.
    pub fn redacted_entries(&self, matcher: &SecretMatcher) -> Vec<(String, String)> {
        self.keys()
            .into_iter()
            .map(|key| {
                let value = self.values.get(key).map(String::as_str).unwrap_or_default();
                (key.to_string(), matcher.redact(key, value).to_string())
            })
            .collect()
    }
}

impl fmt::Debug for InstallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matcher = SecretMatcher::with_builtins();
        f.debug_map()
            .entries(self.redacted_entries(&matcher))
            .finish()
    }
}
