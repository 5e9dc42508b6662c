use tracing::trace;

use crate::matcher::matches;
use crate::middleware::NamedHandle;

/// A validated rule with its `apply` names already resolved to middleware
/// handles, ready for per-invocation evaluation on the dispatch path.
#[derive(Debug, Clone, Default)]
pub struct ResolvedRule {
    on: Vec<String>,
    except: Vec<String>,
    apply: Vec<NamedHandle>,
}

impl ResolvedRule {
    pub(crate) fn new(on: Vec<String>, except: Vec<String>, apply: Vec<NamedHandle>) -> Self {
        Self { on, except, apply }
    }

    /// Decide whether this rule applies to `method`.
    ///
    /// Exclusion always wins: a method matching both an `except` and an `on`
    /// pattern is excluded. With no `except` hit, a non-empty `on` requires
    /// at least one match; an empty `on` applies unconditionally.
    pub fn applies_to(&self, method: &str) -> bool {
        if self.except.iter().any(|p| matches(p, method)) {
            trace!(method, "method excluded by rule");
            return false;
        }

        if !self.on.is_empty() && !self.on.iter().any(|p| matches(p, method)) {
            trace!(method, "no inclusion pattern matched method");
            return false;
        }

        true
    }

    /// The ordered middleware chain for `method`: the rule's resolved
    /// `apply` list when the rule applies, otherwise empty.
    pub fn select(&self, method: &str) -> &[NamedHandle] {
        if self.applies_to(method) {
            &self.apply
        } else {
            &[]
        }
    }
}
