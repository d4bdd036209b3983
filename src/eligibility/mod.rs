//! Install eligibility.
//!
//! Decides whether the agent installer may proceed given the state of the
//! service account and the agent's Windows service.
//!
//! - [`check`] - The predicate and its logging wrapper
//! - [`decision`] - Decision and reason types

pub mod check;
pub mod decision;

pub use check::{
    evaluate, evaluate_domain_controller, evaluate_member, screen_account, EligibilityCheck,
};
pub use decision::{Decision, DecisionReason};
