//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Check whether the agent installer can proceed on this machine.
#[derive(Debug, Parser)]
#[command(name = "install-eligibility")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true, env = "INSTALL_ELIGIBILITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decide whether installation can proceed
    Check(CheckArgs),

    /// Split a `domain\user` account name into its parts
    ParseAccount(ParseAccountArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// The machine is a domain controller
    #[arg(long)]
    pub domain_controller: bool,

    /// The service account already exists
    #[arg(long)]
    pub account_exists: bool,

    /// The agent service already exists
    #[arg(long)]
    pub service_exists: bool,

    /// Domain or NetBIOS name of this machine
    #[arg(long, value_name = "NAME")]
    pub local_domain: Option<String>,

    /// Computer name of this machine
    #[arg(long, value_name = "NAME")]
    pub computer_name: Option<String>,

    /// Raw custom action data (KEY=VALUE lines)
    #[arg(long, value_name = "DATA")]
    pub data: Option<String>,

    /// Read custom action data from a file
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Set a single property (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Include the (redacted) properties in the output
    #[arg(long)]
    pub show_context: bool,
}

/// Arguments for the `parse-account` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ParseAccountArgs {
    /// Account name, e.g. `CORP\ddagentuser`
    pub account: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_flags() {
        let cli = Cli::parse_from([
            "install-eligibility",
            "check",
            "--domain-controller",
            "--service-exists",
            "--local-domain",
            "domain",
            "--data",
            "DDAGENTUSER_NAME=different_domain\\test",
        ]);

        let Commands::Check(args) = cli.command else {
            panic!("Expected Check command");
        };
        assert!(args.domain_controller);
        assert!(!args.account_exists);
        assert!(args.service_exists);
        assert_eq!(args.local_domain.as_deref(), Some("domain"));
        assert_eq!(
            args.data.as_deref(),
            Some("DDAGENTUSER_NAME=different_domain\\test")
        );
    }

    #[test]
    fn set_is_repeatable() {
        let cli = Cli::parse_from([
            "install-eligibility",
            "check",
            "--set",
            "A=1",
            "--set",
            "B=2",
        ]);

        let Commands::Check(args) = cli.command else {
            panic!("Expected Check command");
        };
        assert_eq!(args.set, vec!["A=1".to_string(), "B=2".to_string()]);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["install-eligibility", "check", "--debug", "--quiet"]);
        assert!(cli.debug);
        assert!(cli.quiet);
    }

    #[test]
    fn parses_parse_account() {
        let cli = Cli::parse_from(["install-eligibility", "parse-account", "corp\\svc", "--json"]);

        let Commands::ParseAccount(args) = cli.command else {
            panic!("Expected ParseAccount command");
        };
        assert_eq!(args.account, "corp\\svc");
        assert!(args.json);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["install-eligibility"]).is_err());
    }
}
