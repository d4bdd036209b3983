//! Check command implementation.
//!
//! `install-eligibility check` runs the eligibility predicate against facts
//! passed as flags and exits 0 when installation can proceed, 1 when it
//! cannot.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::config::EligibilityConfig;
use crate::context::InstallContext;
use crate::eligibility::{Decision, DecisionReason, EligibilityCheck};
use crate::environment::{EnvironmentFacts, LocalIdentity};
use crate::error::{EligibilityError, Result};

use super::dispatcher::{Command, CommandResult};

/// Exit code when installation cannot proceed.
pub const EXIT_NOT_ELIGIBLE: u8 = 1;

/// The check command implementation.
pub struct CheckCommand {
    config: EligibilityConfig,
    args: CheckArgs,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    can_install: bool,
    should_reset_password: bool,
    reason: DecisionReason,
    explanation: &'static str,
    facts: EnvironmentFacts,
    #[serde(skip_serializing_if = "Option::is_none")]
    account: Option<String>,
    local_identity: LocalIdentity,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<BTreeMap<String, String>>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: EligibilityConfig, args: CheckArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Assemble the custom-action data from the file, raw data, and `--set` flags, in that order.
    pub fn build_context(&self) -> Result<InstallContext> {
        let mut ctx = match &self.args.data_file {
            Some(path) => InstallContext::load(path)?,
            None => InstallContext::new(),
        };

        if let Some(data) = &self.args.data {
            ctx.init(data);
        }

        for assignment in &self.args.set {
            let (key, value) = parse_assignment(assignment)?;
            ctx.set_value(key, value);
        }

        Ok(ctx)
    }

    /// Resolve the local identity, requiring one when the account is domain-qualified.
    pub fn resolve_identity(&self, ctx: &InstallContext) -> Result<LocalIdentity> {
        let identity = self.config.identity.resolve(
            self.args.local_domain.as_deref(),
            self.args.computer_name.as_deref(),
        );

        if identity.is_unknown() {
            if let Some(account) = ctx.account_name(&self.config.properties) {
                if account.is_qualified() && !account.is_local_machine() {
                    return Err(EligibilityError::MissingIdentity {
                        account: account.to_string(),
                    });
                }
            }
        }

        Ok(identity)
    }

    fn facts(&self) -> EnvironmentFacts {
        EnvironmentFacts::new(
            self.args.domain_controller,
            self.args.account_exists,
            self.args.service_exists,
        )
    }

    fn report(
        &self,
        decision: &Decision,
        ctx: &InstallContext,
        identity: LocalIdentity,
    ) -> CheckReport {
        let context = self.args.show_context.then(|| {
            ctx.redacted_entries(&self.config.secret_matcher())
                .into_iter()
                .collect()
        });

        CheckReport {
            can_install: decision.can_install,
            should_reset_password: decision.should_reset_password,
            reason: decision.reason,
            explanation: decision.reason.describe(),
            facts: self.facts(),
            account: ctx
                .account_name(&self.config.properties)
                .map(|a| a.to_string()),
            local_identity: identity,
            context,
        }
    }

    fn write_human(out: &mut dyn Write, report: &CheckReport) -> Result<()> {
        if report.can_install {
            writeln!(out, "Installation can proceed")?;
        } else {
            writeln!(out, "Installation cannot proceed")?;
        }
        writeln!(out, "  Reason: {}", report.explanation)?;
        writeln!(
            out,
            "  Reset password: {}",
            if report.should_reset_password {
                "yes"
            } else {
                "no"
            }
        )?;
        if let Some(account) = &report.account {
            writeln!(out, "  Account: {}", account)?;
        }
        if let Some(context) = &report.context {
            writeln!(out, "  Properties:")?;
            for (key, value) in context {
                writeln!(out, "    {}={}", key, value)?;
            }
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let ctx = self.build_context()?;
        let identity = self.resolve_identity(&ctx)?;
        let check = EligibilityCheck::new(&self.config, identity.clone());

        let decision = check.run(&self.facts(), &ctx);
        let report = self.report(&decision, &ctx, identity);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", json)?;
        } else {
            Self::write_human(out, &report)?;
        }

        if decision.can_install {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_NOT_ELIGIBLE))
        }
    }
}

/// Split a `KEY=VALUE` assignment.
fn parse_assignment(input: &str) -> Result<(String, String)> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(EligibilityError::InvalidProperty {
            input: input.split('=').next().unwrap_or_default().to_string(),
        }),
    }
}
