//! Local domain identity.
//!
//! A service account qualified as `DOMAIN\user` can only be created by the
//! installer when `DOMAIN` names the machine's own domain (or, on a member
//! server or workstation, the machine itself). Qualifiers are compared the
//! way Windows compares NetBIOS names: case-insensitively, and with a
//! trailing `.local` DNS suffix ignored, so `EBOKSWEB.LOCAL` and `eboksweb`
//! refer to the same domain.

use crate::context::AccountName;
use serde::{Deserialize, Serialize};

const LOCAL_SUFFIX: &str = ".local";

/// The machine's own domain and computer name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalIdentity {
    /// Domain (or NetBIOS) name the machine belongs to.
    pub domain: String,
    /// The machine's computer name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
}

impl LocalIdentity {
    /// Create an identity from a domain name.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            computer_name: None,
        }
    }

    /// Add the machine's computer name.
    pub fn with_computer_name(mut self, computer_name: impl Into<String>) -> Self {
        self.computer_name = Some(computer_name.into());
        self
    }

    /// Whether the domain name is unknown.
    pub fn is_unknown(&self) -> bool {
        self.domain.trim().is_empty()
    }

    /// Whether `qualifier` refers to this machine's domain or to the machine itself.
    ///
    /// # Example
    ///
    /// ```
    /// use install_eligibility::environment::LocalIdentity;
    ///
    /// let identity = LocalIdentity::new("eboksweb");
    /// assert!(identity.matches_qualifier("EBOKSWEB.LOCAL"));
    /// assert!(identity.matches_qualifier("."));
    /// assert!(!identity.matches_qualifier("different_domain"));
    /// ```
    pub fn matches_qualifier(&self, qualifier: &str) -> bool {
        let qualifier = qualifier.trim();
        if qualifier == crate::context::LOCAL_MACHINE_QUALIFIER {
            return true;
        }

        let wanted = normalize_domain(qualifier);
        if wanted.is_empty() {
            return false;
        }

        std::iter::once(self.domain.as_str())
            .chain(self.computer_name.as_deref())
            .map(normalize_domain)
            .any(|candidate| candidate == wanted)
    }

    /// Whether an account belongs to this machine's domain.
    ///
    /// Unqualified accounts always do; the installer resolves them locally.
    pub fn owns(&self, account: &AccountName) -> bool {
        match &account.domain {
            Some(domain) => self.matches_qualifier(domain),
            None => true,
        }
    }
}

/// Normalize a domain name for comparison.
///
/// Lowercases the name and strips one trailing `.local` suffix.
///
/// ```
/// use install_eligibility::environment::normalize_domain;
///
/// assert_eq!(normalize_domain("EBOKSWEB.LOCAL"), "eboksweb");
/// assert_eq!(normalize_domain(" Corp "), "corp");
/// assert_eq!(normalize_domain("corp.example.com"), "corp.example.com");
/// ```
pub fn normalize_domain(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    match lowered.strip_suffix(LOCAL_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}
