//! Facts about the target machine.
//!
//! Everything here is supplied by the caller. Detecting a domain
//! controller or enumerating accounts and services happens in the
//! installer host; this module only carries the answers.
//!
//! - [`facts`] - Whether the machine is a DC and what already exists
//! - [`identity`] - The machine's domain identity and qualifier matching

pub mod facts;
pub mod identity;

pub use facts::EnvironmentFacts;
pub use identity::{normalize_domain, LocalIdentity};
