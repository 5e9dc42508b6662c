use tracing::debug;

use crate::diagnostics::DiagnosticSink;
use crate::evaluator::ResolvedRule;
use crate::middleware::{MiddlewareRegistry, NamedHandle};
use crate::schema::RuleConfig;

/// Check one rule for structural well-formedness and resolve its `apply`
/// names against the registry.
///
/// Returns `None` for rules that are not usable: a missing or empty `apply`,
/// or neither `on` nor `except` present. Such rules are reported through the
/// sink and skipped so the rest of the policy still installs.
///
/// Unresolved middleware names are softer: each is reported and dropped
/// individually, and the rule survives with whatever resolved. A rule whose
/// names all fail to resolve installs with an empty chain and simply falls
/// through at dispatch time.
pub fn validate(
    rule: &RuleConfig,
    registry: &MiddlewareRegistry,
    sink: &dyn DiagnosticSink,
) -> Option<ResolvedRule> {
    let apply_names = rule.apply_names();

    if apply_names.is_empty() || (rule.on.is_none() && rule.except.is_none()) {
        sink.report(&format!(
            "invalid middleware rule, requires \"apply\" and either \"on\" or \"except\": {rule:?}"
        ));
        return None;
    }

    let mut apply = Vec::with_capacity(apply_names.len());
    for name in apply_names {
        match registry.get(&name) {
            Some(handle) => apply.push(NamedHandle {
                name,
                handle: handle.clone(),
            }),
            None => {
                sink.report(&format!("no middleware found by that name, ignoring: {name}"));
            }
        }
    }

    debug!(
        on = ?rule.on_patterns(),
        except = ?rule.except_patterns(),
        steps = apply.len(),
        "resolved middleware rule"
    );

    Some(ResolvedRule::new(
        rule.on_patterns(),
        rule.except_patterns(),
        apply,
    ))
}
