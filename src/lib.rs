//! install-eligibility - service account checks for Windows agent installers.
//!
//! Before the agent installer creates or reuses its service account it asks
//! one question: given what already exists on this machine and what the
//! user configured, can installation proceed, and does the existing
//! account's password need resetting?
//!
//! # Modules
//!
//! - [`cli`] - Command-line driver for running checks outside the installer
//! - [`config`] - Property names and identity defaults, loaded from YAML
//! - [`context`] - Custom-action properties and account name parsing
//! - [`eligibility`] - The eligibility predicate and its decisions
//! - [`environment`] - Machine facts and local identity matching
//! - [`error`] - Error types and result aliases
//! - [`secrets`] - Redaction of password properties
//!
//! # Example
//!
//! ```
//! use install_eligibility::config::PropertyNames;
//! use install_eligibility::context::InstallContext;
//! use install_eligibility::eligibility::evaluate;
//! use install_eligibility::environment::{EnvironmentFacts, LocalIdentity};
//!
//! let mut ctx = InstallContext::new();
//! ctx.set_value("DDAGENTUSER_PASSWORD", "1234");
//!
//! let decision = evaluate(
//!     &EnvironmentFacts::new(true, true, false),
//!     &ctx,
//!     &LocalIdentity::new("corp"),
//!     &PropertyNames::default(),
//! );
//! assert!(decision.can_install);
//! assert!(!decision.should_reset_password);
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod eligibility;
pub mod environment;
pub mod error;
pub mod secrets;

pub use eligibility::{evaluate, Decision, DecisionReason, EligibilityCheck};
pub use error::{EligibilityError, Result};
