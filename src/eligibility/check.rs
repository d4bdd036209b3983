//! The install eligibility predicate.
//!
//! [`evaluate`] is a pure function of the environment facts, the
//! custom-action data, and the machine's identity. [`EligibilityCheck`]
//! binds the configured property names and identity and logs each verdict
//! for the installer log.

use crate::config::{EligibilityConfig, PropertyNames};
use crate::context::{AccountName, AccountProperty, InstallContext};
use crate::eligibility::decision::{Decision, DecisionReason};
use crate::environment::{EnvironmentFacts, LocalIdentity};

/// Decide whether installation can proceed.
///
/// Rules are applied in order:
///
/// 1. A service without its account is an inconsistent machine: deny.
/// 2. An unusable account name denies regardless of what exists. See
///    [`screen_account`].
/// 3. Account and service both present: allow (upgrade or repair).
/// 4. Otherwise the service is absent and the outcome depends on whether
///    the machine is a domain controller. See [`evaluate_domain_controller`]
///    and [`evaluate_member`].
///
/// # Example
///
/// ```
/// use install_eligibility::config::PropertyNames;
/// use install_eligibility::context::InstallContext;
/// use install_eligibility::eligibility::evaluate;
/// use install_eligibility::environment::{EnvironmentFacts, LocalIdentity};
///
/// let ctx = InstallContext::parse("DDAGENTUSER_NAME=EBOKSWEB.LOCAL\\ddagentuser_dom");
/// let decision = evaluate(
///     &EnvironmentFacts::new(true, false, false),
///     &ctx,
///     &LocalIdentity::new("eboksweb"),
///     &PropertyNames::default(),
/// );
/// assert_eq!(decision.pair(), (true, false));
/// ```
pub fn evaluate(
    facts: &EnvironmentFacts,
    context: &InstallContext,
    identity: &LocalIdentity,
    names: &PropertyNames,
) -> Decision {
    if facts.is_orphaned_service() {
        return Decision::deny(DecisionReason::ServiceWithoutAccount);
    }

    let account = match screen_account(
        facts.is_domain_controller,
        &context.account_property(names),
        identity,
    ) {
        Ok(account) => account,
        Err(reason) => return Decision::deny(reason),
    };

    if facts.is_existing_installation() {
        return Decision::allow(DecisionReason::ExistingInstallation);
    }

    let password_supplied = context.password_supplied(names);

    if facts.is_domain_controller {
        evaluate_domain_controller(facts.account_exists, account.is_some(), password_supplied)
    } else {
        evaluate_member(facts.account_exists, password_supplied)
    }
}

/// Reject account names that cannot be used on this machine.
///
/// A configured name must parse, must not be a `.\user` local account on a
/// domain controller, and its qualifier must resolve to the local identity.
/// Returns the usable account, or `None` when no name was configured.
pub fn screen_account(
    is_domain_controller: bool,
    property: &AccountProperty,
    identity: &LocalIdentity,
) -> Result<Option<AccountName>, DecisionReason> {
    let account = match property {
        AccountProperty::Absent => return Ok(None),
        AccountProperty::Malformed => return Err(DecisionReason::MalformedAccountName),
        AccountProperty::Named(account) => account,
    };

    if is_domain_controller && account.is_local_machine() {
        return Err(DecisionReason::LocalAccountOnDomainController);
    }
    if !identity.owns(account) {
        return Err(DecisionReason::ForeignDomain);
    }
    Ok(Some(account.clone()))
}

/// Service absent, target is a domain controller, account already screened.
///
/// Accounts on a DC are domain accounts. An existing one cannot have its
/// password reset by the installer, so the password must be supplied. A new
/// one must be named explicitly.
pub fn evaluate_domain_controller(
    account_exists: bool,
    account_named: bool,
    password_supplied: bool,
) -> Decision {
    if account_exists {
        return if password_supplied {
            Decision::allow(DecisionReason::ExistingAccountWithPassword)
        } else {
            Decision::deny(DecisionReason::DomainPasswordRequired)
        };
    }

    if account_named {
        Decision::allow(DecisionReason::CreateDomainAccount)
    } else {
        Decision::deny(DecisionReason::DomainAccountNameRequired)
    }
}

/// Service absent, target is a member server or workstation, account
/// already screened.
///
/// Without an account name the installer falls back to its default local
/// account, which it can always create. An existing local account with no
/// password supplied is the only case that asks for a password reset: the
/// installer owns local accounts and may set a fresh password on them.
pub fn evaluate_member(account_exists: bool, password_supplied: bool) -> Decision {
    match (account_exists, password_supplied) {
        (true, true) => Decision::allow(DecisionReason::ExistingAccountWithPassword),
        (true, false) => Decision::allow_with_password_reset(DecisionReason::ResetLocalPassword),
        (false, _) => Decision::allow(DecisionReason::CreateLocalAccount),
    }
}

/// Runs eligibility checks with a fixed configuration and logs the outcome.
///
/// # Example
///
/// ```
/// use install_eligibility::config::EligibilityConfig;
/// use install_eligibility::context::InstallContext;
/// use install_eligibility::eligibility::EligibilityCheck;
/// use install_eligibility::environment::{EnvironmentFacts, LocalIdentity};
///
/// let check = EligibilityCheck::new(&EligibilityConfig::default(), LocalIdentity::new("domain"));
/// let ctx = InstallContext::parse("DDAGENTUSER_NAME=different_domain\\test");
///
/// let decision = check.run(&EnvironmentFacts::new(true, false, true), &ctx);
/// assert!(!decision.can_install);
/// ```
#[derive(Debug, Clone)]
pub struct EligibilityCheck {
    names: PropertyNames,
    identity: LocalIdentity,
}

impl EligibilityCheck {
    /// Create a check from configuration and the machine's identity.
    pub fn new(config: &EligibilityConfig, identity: LocalIdentity) -> Self {
        Self {
            names: config.properties.clone(),
            identity,
        }
    }

    /// Evaluate and log.
    pub fn run(&self, facts: &EnvironmentFacts, context: &InstallContext) -> Decision {
        let account = context.value(&self.names.account_name).unwrap_or_default();

        tracing::debug!(
            is_domain_controller = facts.is_domain_controller,
            account_exists = facts.account_exists,
            service_exists = facts.service_exists,
            account = %account,
            password_supplied = context.password_supplied(&self.names),
            local_domain = %self.identity.domain,
            "Evaluating install eligibility"
        );

        let decision = evaluate(facts, context, &self.identity, &self.names);

        if decision.can_install {
            tracing::info!(
                reset_password = decision.should_reset_password,
                "Installation can proceed: {}",
                decision.reason
            );
        } else {
            tracing::warn!("Installation cannot proceed: {}", decision.reason);
        }

        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> PropertyNames {
        PropertyNames::default()
    }

    fn ctx_with(raw: &str) -> InstallContext {
        InstallContext::parse(raw)
    }

    fn all_facts() -> Vec<EnvironmentFacts> {
        let mut facts = Vec::new();
        for is_dc in [false, true] {
            for account in [false, true] {
                for service in [false, true] {
                    facts.push(EnvironmentFacts::new(is_dc, account, service));
                }
            }
        }
        facts
    }

    #[test]
    fn service_without_account_is_denied_everywhere() {
        for is_dc in [true, false] {
            let decision = evaluate(
                &EnvironmentFacts::new(is_dc, false, true),
                &ctx_with("DDAGENTUSER_NAME=svc\nDDAGENTUSER_PASSWORD=pw"),
                &LocalIdentity::new("corp"),
                &names(),
            );
            assert_eq!(decision.reason, DecisionReason::ServiceWithoutAccount);
            assert_eq!(decision.pair(), (false, false));
        }
    }

    #[test]
    fn existing_installation_is_allowed_without_reset() {
        for is_dc in [true, false] {
            let decision = evaluate(
                &EnvironmentFacts::new(is_dc, true, true),
                &InstallContext::new(),
                &LocalIdentity::new("corp"),
                &names(),
            );
            assert_eq!(decision.reason, DecisionReason::ExistingInstallation);
            assert_eq!(decision.pair(), (true, false));
        }
    }

    #[test]
    fn foreign_account_is_denied_whatever_exists() {
        let ctx = ctx_with("DDAGENTUSER_NAME=different_domain\\test\nDDAGENTUSER_PASSWORD=pw");
        let identity = LocalIdentity::new("domain");

        for facts in all_facts().into_iter().filter(|f| !f.is_orphaned_service()) {
            let decision = evaluate(&facts, &ctx, &identity, &names());
            assert_eq!(decision.reason, DecisionReason::ForeignDomain, "{:?}", facts);
            assert_eq!(decision.pair(), (false, false));
        }
    }

    #[test]
    fn malformed_account_is_denied_whatever_exists() {
        let identity = LocalIdentity::new("corp");

        for raw in ["DDAGENTUSER_NAME=partner\\", "DDAGENTUSER_NAME=a\\b\\c"] {
            for facts in all_facts().into_iter().filter(|f| !f.is_orphaned_service()) {
                let decision = evaluate(&facts, &ctx_with(raw), &identity, &names());
                assert_eq!(
                    decision.reason,
                    DecisionReason::MalformedAccountName,
                    "{} {:?}",
                    raw,
                    facts
                );
                assert_eq!(decision.pair(), (false, false));
            }
        }
    }

    #[test]
    fn member_malformed_account_is_not_reset() {
        let decision = evaluate(
            &EnvironmentFacts::new(false, true, false),
            &ctx_with("DDAGENTUSER_NAME=partner\\"),
            &LocalIdentity::new("corp"),
            &names(),
        );
        assert_eq!(decision.pair(), (false, false));
    }

    #[test]
    fn member_malformed_account_is_not_created() {
        let decision = evaluate(
            &EnvironmentFacts::new(false, false, false),
            &ctx_with("DDAGENTUSER_NAME=a\\b\\c"),
            &LocalIdentity::new("corp"),
            &names(),
        );
        assert_eq!(decision.reason, DecisionReason::MalformedAccountName);
        assert!(!decision.can_install);
    }

    #[test]
    fn blank_account_name_is_treated_as_unset() {
        let decision = evaluate(
            &EnvironmentFacts::new(false, false, false),
            &ctx_with("DDAGENTUSER_NAME="),
            &LocalIdentity::new("corp"),
            &names(),
        );
        assert_eq!(decision.reason, DecisionReason::CreateLocalAccount);
    }

    #[test]
    fn local_machine_account_is_denied_on_domain_controller() {
        for account_exists in [false, true] {
            let decision = evaluate(
                &EnvironmentFacts::new(true, account_exists, false),
                &ctx_with("DDAGENTUSER_NAME=.\\ddagentuser\nDDAGENTUSER_PASSWORD=pw"),
                &LocalIdentity::new("corp"),
                &names(),
            );
            assert_eq!(decision.reason, DecisionReason::LocalAccountOnDomainController);
            assert_eq!(decision.pair(), (false, false));
        }
    }

    #[test]
    fn local_machine_account_is_allowed_on_member() {
        let decision = evaluate(
            &EnvironmentFacts::new(false, false, false),
            &ctx_with("DDAGENTUSER_NAME=.\\ddagentuser"),
            &LocalIdentity::new("corp"),
            &names(),
        );
        assert_eq!(decision.reason, DecisionReason::CreateLocalAccount);
    }

    #[test]
    fn screen_account_reports_each_rejection() {
        let identity = LocalIdentity::new("corp");
        let named = |raw: &str| AccountProperty::Named(AccountName::parse(raw).unwrap());

        assert_eq!(screen_account(true, &AccountProperty::Absent, &identity), Ok(None));
        assert_eq!(
            screen_account(false, &AccountProperty::Malformed, &identity),
            Err(DecisionReason::MalformedAccountName)
        );
        assert_eq!(
            screen_account(true, &named(".\\svc"), &identity),
            Err(DecisionReason::LocalAccountOnDomainController)
        );
        assert_eq!(
            screen_account(false, &named("partner\\svc"), &identity),
            Err(DecisionReason::ForeignDomain)
        );
        assert_eq!(
            screen_account(true, &named("CORP.LOCAL\\svc"), &identity),
            Ok(AccountName::parse("CORP.LOCAL\\svc"))
        );
    }

    #[test]
    fn dc_existing_account_requires_password() {
        let identity = LocalIdentity::new("corp");

        let with = evaluate(
            &EnvironmentFacts::new(true, true, false),
            &ctx_with("DDAGENTUSER_PASSWORD=1234"),
            &identity,
            &names(),
        );
        assert_eq!(with.reason, DecisionReason::ExistingAccountWithPassword);
        assert_eq!(with.pair(), (true, false));

        let without = evaluate(
            &EnvironmentFacts::new(true, true, false),
            &InstallContext::new(),
            &identity,
            &names(),
        );
        assert_eq!(without.reason, DecisionReason::DomainPasswordRequired);
        assert_eq!(without.pair(), (false, false));
    }

    #[test]
    fn dc_new_account_requires_a_name() {
        let decision = evaluate_domain_controller(false, false, false);
        assert_eq!(decision.reason, DecisionReason::DomainAccountNameRequired);
        assert!(!decision.can_install);

        let decision = evaluate_domain_controller(false, true, false);
        assert_eq!(decision.reason, DecisionReason::CreateDomainAccount);
        assert!(decision.can_install);
    }

    #[test]
    fn dc_new_unqualified_account_is_created_in_domain() {
        let decision = evaluate(
            &EnvironmentFacts::new(true, false, false),
            &ctx_with("DDAGENTUSER_NAME=svc"),
            &LocalIdentity::new("corp"),
            &names(),
        );
        assert_eq!(decision.reason, DecisionReason::CreateDomainAccount);
    }

    #[test]
    fn member_reset_branch_is_the_only_reset() {
        assert_eq!(evaluate_member(true, false).pair(), (true, true));
        assert_eq!(evaluate_member(true, true).pair(), (true, false));
        assert_eq!(evaluate_member(false, false).pair(), (true, false));
        assert_eq!(evaluate_member(false, true).pair(), (true, false));
    }

    #[test]
    fn member_existing_account_without_password_is_reset() {
        let decision = evaluate(
            &EnvironmentFacts::new(false, true, false),
            &ctx_with("DDAGENTUSER_NAME=ddagentuser"),
            &LocalIdentity::new("WORKGROUP"),
            &names(),
        );
        assert_eq!(decision.reason, DecisionReason::ResetLocalPassword);
        assert_eq!(decision.pair(), (true, true));
    }

    #[test]
    fn member_existing_account_with_password_is_not_reset() {
        let decision = evaluate(
            &EnvironmentFacts::new(false, true, false),
            &ctx_with("DDAGENTUSER_NAME=ddagentuser\nDDAGENTUSER_PASSWORD=pw"),
            &LocalIdentity::new("WORKGROUP"),
            &names(),
        );
        assert_eq!(decision.reason, DecisionReason::ExistingAccountWithPassword);
        assert_eq!(decision.pair(), (true, false));
    }

    #[test]
    fn member_new_account_defaults_to_local_creation() {
        let decision = evaluate(
            &EnvironmentFacts::new(false, false, false),
            &InstallContext::new(),
            &LocalIdentity::default(),
            &names(),
        );
        assert_eq!(decision.reason, DecisionReason::CreateLocalAccount);
        assert_eq!(decision.pair(), (true, false));
    }

    #[test]
    fn member_new_account_accepts_computer_name_qualifier() {
        let identity = LocalIdentity::new("corp").with_computer_name("WEB01");
        let decision = evaluate(
            &EnvironmentFacts::new(false, false, false),
            &ctx_with("DDAGENTUSER_NAME=web01\\ddagentuser"),
            &identity,
            &names(),
        );
        assert_eq!(decision.reason, DecisionReason::CreateLocalAccount);
    }

    #[test]
    fn check_uses_configured_property_names() {
        let mut config = EligibilityConfig::default();
        config.properties.password = "pass".to_string();
        let check = EligibilityCheck::new(&config, LocalIdentity::new("corp"));

        let mut ctx = InstallContext::new();
        ctx.set_value("pass", "1234");

        let decision = check.run(&EnvironmentFacts::new(true, true, false), &ctx);
        assert_eq!(decision.pair(), (true, false));
    }
}
