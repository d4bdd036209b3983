//! Eligibility decisions.
//!
//! A [`Decision`] is the complete answer handed back to the installer:
//! whether to proceed, whether to reset the existing account's password,
//! and which rule produced that answer.

use serde::Serialize;
use std::fmt;

/// The rule that decided an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// The service is registered but its account is missing.
    ServiceWithoutAccount,

    /// Account and service are both in place; this is an upgrade or repair.
    ExistingInstallation,

    /// The account exists and a password was supplied to register the service.
    ExistingAccountWithPassword,

    /// On a domain controller an existing domain account needs its password.
    DomainPasswordRequired,

    /// On a domain controller a new account must be named explicitly.
    DomainAccountNameRequired,

    /// The account's domain qualifier is not this machine's domain.
    ForeignDomain,

    /// An account name was configured but cannot be parsed.
    MalformedAccountName,

    /// A `.\user` local account was requested on a domain controller.
    LocalAccountOnDomainController,

    /// A new domain account will be created in this machine's domain.
    CreateDomainAccount,

    /// An existing local account will have its password reset.
    ResetLocalPassword,

    /// A new local account will be created.
    CreateLocalAccount,
}

impl DecisionReason {
    /// Human-readable explanation for installer logs.
    pub fn describe(&self) -> &'static str {
        match self {
            DecisionReason::ServiceWithoutAccount => {
                "the service exists but its user account does not"
            }
            DecisionReason::ExistingInstallation => "the user account and service already exist",
            DecisionReason::ExistingAccountWithPassword => {
                "the user account exists and a password was supplied"
            }
            DecisionReason::DomainPasswordRequired => {
                "the user account exists on a domain controller but no password was supplied"
            }
            DecisionReason::DomainAccountNameRequired => {
                "a domain controller requires an explicit user account name"
            }
            DecisionReason::ForeignDomain => {
                "the user account belongs to a different domain than this machine"
            }
            DecisionReason::MalformedAccountName => "the configured user account name is malformed",
            DecisionReason::LocalAccountOnDomainController => {
                "a domain controller has no local user accounts"
            }
            DecisionReason::CreateDomainAccount => {
                "a new domain user account will be created in this domain"
            }
            DecisionReason::ResetLocalPassword => {
                "the local user account exists and its password will be reset"
            }
            DecisionReason::CreateLocalAccount => "a new local user account will be created",
        }
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Outcome of an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Installation may proceed.
    pub can_install: bool,
    /// The installer should reset the existing account's password.
    pub should_reset_password: bool,
    /// The rule that produced this decision.
    pub reason: DecisionReason,
}

impl Decision {
    /// Installation may proceed as-is.
    pub fn allow(reason: DecisionReason) -> Self {
        Self {
            can_install: true,
            should_reset_password: false,
            reason,
        }
    }

    /// Installation may proceed after resetting the account password.
    pub fn allow_with_password_reset(reason: DecisionReason) -> Self {
        Self {
            can_install: true,
            should_reset_password: true,
            reason,
        }
    }

    /// Installation must stop.
    pub fn deny(reason: DecisionReason) -> Self {
        Self {
            can_install: false,
            should_reset_password: false,
            reason,
        }
    }

    /// The `(can_install, should_reset_password)` pair.
    pub fn pair(&self) -> (bool, bool) {
        (self.can_install, self.should_reset_password)
    }
}
