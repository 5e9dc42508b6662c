use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::diagnostics::DiagnosticSink;
use crate::evaluator::ResolvedRule;
use crate::executor::run_chain;
use crate::middleware::{CallContext, HookRegistrar, Middleware, MiddlewareRegistry};
use crate::schema::PolicyConfig;
use crate::validator::validate;

/// Pattern every rule hook is registered under.
///
/// Registering everything under the universal pattern and filtering
/// internally keeps rule ordering under this engine's control; host
/// frameworks that reorder hooks by pattern specificity would otherwise
/// scramble the policy's declared precedence.
pub const UNIVERSAL_PATTERN: &str = "*.*";

/// Install a policy: validate each rule in declaration order and register
/// one hook per valid rule with the host framework.
///
/// Because the host invokes same-pattern hooks in registration order and
/// stops at the first error, the installed hooks form one flattened chain
/// across the whole invocation: rule 1's middleware runs to completion
/// before rule 2's hook is entered, and an error anywhere aborts the rest.
///
/// Invalid rules are reported through `sink` and skipped; installation
/// itself always succeeds, even with zero usable rules. Returns the number
/// of hooks registered.
pub fn install(
    policy: &PolicyConfig,
    registry: &MiddlewareRegistry,
    registrar: &mut dyn HookRegistrar,
    sink: &dyn DiagnosticSink,
) -> usize {
    let mut installed = 0;

    for rule in &policy.rules {
        let Some(resolved) = validate(rule, registry, sink) else {
            continue;
        };
        registrar.register_before(UNIVERSAL_PATTERN, Arc::new(RuleHook { rule: resolved }));
        installed += 1;
    }

    debug!(
        rules = policy.rules.len(),
        installed, "middleware policy installed"
    );
    installed
}

/// The hook registered for one rule: evaluate the rule against the incoming
/// method, then run whatever chain it selected. A non-applying rule yields
/// an empty chain and falls through immediately.
struct RuleHook {
    rule: ResolvedRule,
}

#[async_trait]
impl Middleware for RuleHook {
    async fn handle(&self, ctx: &mut CallContext) -> anyhow::Result<()> {
        let chain = self.rule.select(&ctx.method);
        run_chain(chain, ctx).await
    }
}
