//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, EligibilityConfig};
use crate::error::Result;

use super::check::CheckCommand;
use super::parse_account::ParseAccountCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: EligibilityConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher, loading the config named on the command line.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref())?;
        Ok(Self::new(config))
    }

    /// Create a dispatcher with an already loaded config.
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                CheckCommand::new(self.config.clone(), args.clone()).execute(out)
            }
            Commands::ParseAccount(args) => ParseAccountCommand::new(args.clone()).execute(out),
        }
    }
}
