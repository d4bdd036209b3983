//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod check;
pub mod dispatcher;
pub mod parse_account;

pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use parse_account::ParseAccountCommand;
