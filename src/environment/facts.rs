//! Environment facts gathered by the installer host.

use serde::{Deserialize, Serialize};

/// What the installer host found on the target machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentFacts {
    /// The machine is a domain controller.
    pub is_domain_controller: bool,
    /// The configured service account already exists.
    pub account_exists: bool,
    /// The agent's Windows service is already registered.
    pub service_exists: bool,
}

impl EnvironmentFacts {
    /// Create facts from the three probe results.
    pub fn new(is_domain_controller: bool, account_exists: bool, service_exists: bool) -> Self {
        Self {
            is_domain_controller,
            account_exists,
            service_exists,
        }
    }

    /// A registered service whose account is gone.
    pub fn is_orphaned_service(&self) -> bool {
        self.service_exists && !self.account_exists
    }

    /// Both the account and the service are already in place.
    pub fn is_existing_installation(&self) -> bool {
        self.service_exists && self.account_exists
    }
}
