//! Configuration schema.
//!
//! ```yaml
//! properties:
//!   account_name: DDAGENTUSER_NAME
//!   password: DDAGENTUSER_PASSWORD
//! identity:
//!   domain: eboksweb
//!   computer_name: WEB01
//! secret_properties:
//!   - APIKEY
//! ```
//!
//! Every section is optional.

use crate::environment::LocalIdentity;
use crate::secrets::SecretMatcher;
use serde::{Deserialize, Serialize};

/// Default property holding the service account name.
pub const DEFAULT_ACCOUNT_NAME_PROPERTY: &str = "DDAGENTUSER_NAME";

/// Default property holding the service account password.
pub const DEFAULT_PASSWORD_PROPERTY: &str = "DDAGENTUSER_PASSWORD";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EligibilityConfig {
    /// Names of the installer properties the check reads.
    pub properties: PropertyNames,

    /// Default local identity, used when the caller does not pass one.
    pub identity: IdentityConfig,

    /// Extra property names whose values must never be printed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secret_properties: Vec<String>,
}

impl EligibilityConfig {
    /// Secret matcher covering the built-ins, the password property, and
    /// any configured secret properties.
    pub fn secret_matcher(&self) -> SecretMatcher {
        let mut names = self.secret_properties.clone();
        names.push(self.properties.password.clone());
        SecretMatcher::with_builtins_and_custom(&names)
    }
}

/// Installer property names for the account and password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropertyNames {
    /// Property holding the account name, optionally `domain\user`.
    pub account_name: String,
    /// Property holding the account password.
    pub password: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            account_name: DEFAULT_ACCOUNT_NAME_PROPERTY.to_string(),
            password: DEFAULT_PASSWORD_PROPERTY.to_string(),
        }
    }
}

/// Configured local identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    /// Domain or NetBIOS name of the machine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Computer name of the machine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
}

impl IdentityConfig {
    /// Resolve a [`LocalIdentity`], letting explicit values override config.
    ///
    /// An unset domain resolves to an empty (unknown) identity.
    pub fn resolve(&self, domain: Option<&str>, computer_name: Option<&str>) -> LocalIdentity {
        let domain = domain
            .or(self.domain.as_deref())
            .unwrap_or_default()
            .to_string();
        let computer_name = computer_name
            .or(self.computer_name.as_deref())
            .map(str::to_string);

        LocalIdentity {
            domain,
            computer_name,
        }
    }
}
