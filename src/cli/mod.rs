//! Command-line interface.
//!
//! A thin driver around the eligibility check, for running it outside the
//! installer host (support scripts, CI smoke tests, reproducing a customer
//! installer log).
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, ParseAccountArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
