//! Parse-account command implementation.
//!
//! `install-eligibility parse-account 'CORP\svc'` shows how an account
//! property will be split, which helps when diagnosing a `ForeignDomain`
//! verdict.

use std::io::Write;

use crate::cli::args::ParseAccountArgs;
use crate::context::AccountName;
use crate::environment::normalize_domain;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The parse-account command implementation.
pub struct ParseAccountCommand {
    args: ParseAccountArgs,
}

impl ParseAccountCommand {
    /// Create a new parse-account command.
    pub fn new(args: ParseAccountArgs) -> Self {
        Self { args }
    }
}

impl Command for ParseAccountCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let Some(account) = AccountName::parse(&self.args.account) else {
            writeln!(out, "Malformed account name: '{}'", self.args.account)?;
            return Ok(CommandResult::failure(1));
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&account).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", json)?;
        } else {
            match &account.domain {
                Some(domain) => {
                    writeln!(out, "Domain: {}", domain)?;
                    writeln!(out, "Normalized domain: {}", normalize_domain(domain))?;
                }
                None => writeln!(out, "Domain: (none)")?,
            }
            writeln!(out, "User: {}", account.user)?;
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(account: &str, json: bool) -> (CommandResult, String) {
        let cmd = ParseAccountCommand::new(ParseAccountArgs {
            account: account.to_string(),
            json,
        });
        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_domain_and_user() {
        let (result, output) = run("EBOKSWEB.LOCAL\\ddagentuser_dom", false);

        assert!(result.success);
        assert!(output.contains("Domain: EBOKSWEB.LOCAL"));
        assert!(output.contains("Normalized domain: eboksweb"));
        assert!(output.contains("User: ddagentuser_dom"));
    }

    #[test]
    fn prints_none_for_unqualified() {
        let (_, output) = run("ddagentuser", false);
        assert!(output.contains("Domain: (none)"));
    }

    #[test]
    fn json_output() {
        let (_, output) = run("corp\\svc", true);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["domain"], "corp");
        assert_eq!(json["user"], "svc");
    }

    #[test]
    fn malformed_name_fails() {
        let (result, output) = run("corp\\", false);

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(output.contains("Malformed"));
    }
}
