//! Service account name parsing.
//!
//! Installer properties carry the account as a single string, either a bare
//! user name (`ddagentuser`) or a down-level logon name (`CORP\ddagentuser`).
//! [`AccountName::parse`] splits that string into its domain qualifier and
//! user part so the eligibility rules never look at raw property text.

use serde::Serialize;
use std::fmt;

/// Qualifier that refers to the local machine (`.\user`).
pub const LOCAL_MACHINE_QUALIFIER: &str = ".";

/// A parsed service account name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountName {
    /// Domain qualifier, if the name was written as `domain\user`.
    pub domain: Option<String>,
    /// The user part of the name.
    pub user: String,
}

impl AccountName {
    /// Parse an account name.
    ///
    /// Returns `None` for names that cannot identify an account: empty
    /// input, an empty user or domain around the separator, or more than
    /// one `\`.
    ///
    /// # Example
    ///
    /// ```
    /// use install_eligibility::context::AccountName;
    ///
    /// let account = AccountName::parse("EBOKSWEB.LOCAL\\ddagentuser_dom").unwrap();
    /// assert_eq!(account.domain.as_deref(), Some("EBOKSWEB.LOCAL"));
    /// assert_eq!(account.user, "ddagentuser_dom");
    ///
    /// assert!(AccountName::parse("ddagentuser").unwrap().domain.is_none());
    /// assert!(AccountName::parse("corp\\").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        match raw.split_once('\\') {
            None => Some(Self {
                domain: None,
                user: raw.to_string(),
            }),
            Some((domain, user)) => {
                let domain = domain.trim();
                let user = user.trim();
                if domain.is_empty() || user.is_empty() || user.contains('\\') {
                    return None;
                }
                Some(Self {
                    domain: Some(domain.to_string()),
                    user: user.to_string(),
                })
            }
        }
    }

    /// Whether the name carries a domain qualifier.
    pub fn is_qualified(&self) -> bool {
        self.domain.is_some()
    }

    /// Whether the name is explicitly qualified with the local machine (`.\user`).
    pub fn is_local_machine(&self) -> bool {
        self.domain.as_deref() == Some(LOCAL_MACHINE_QUALIFIER)
    }
}

/// State of the account-name property in custom-action data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountProperty {
    /// No account name was configured (missing or blank).
    Absent,
    /// A value was configured but does not name an account.
    Malformed,
    /// A well-formed account name.
    Named(AccountName),
}

impl AccountProperty {
    /// Classify a raw property value.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            None => AccountProperty::Absent,
            Some(raw) if raw.trim().is_empty() => AccountProperty::Absent,
            Some(raw) => match AccountName::parse(raw) {
                Some(account) => AccountProperty::Named(account),
                None => AccountProperty::Malformed,
            },
        }
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.domain {
            Some(domain) => write!(f, "{}\\{}", domain, self.user),
            None => f.write_str(&self.user),
        }
    }
}
