//! Installer-supplied configuration.
//!
//! - [`install_context`] - The custom-action property map and its parser
//! - [`account`] - Splitting `domain\user` account names

pub mod account;
pub mod install_context;

pub use account::{AccountName, AccountProperty, LOCAL_MACHINE_QUALIFIER};
pub use install_context::InstallContext;
