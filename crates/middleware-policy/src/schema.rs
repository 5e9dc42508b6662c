use serde::{Deserialize, Serialize};

/// Top-level policy configuration: an ordered list of middleware rules.
///
/// Rule order is significant — it defines execution precedence across the
/// whole invocation (see [`crate::dispatcher::install`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// A single middleware rule as written in the policy file.
///
/// Each of the three fields accepts either a bare string or a list of
/// strings. Keys other than `on`/`except`/`apply` are ignored by the parser;
/// the validator decides whether what remains is a usable rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Patterns the rule opts in to. Absent means "everything not excepted".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<OneOrMany<String>>,
    /// Patterns the rule opts out of; exclusion beats inclusion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub except: Option<OneOrMany<String>>,
    /// Ordered middleware names to run when the rule applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply: Option<OneOrMany<String>>,
}

impl RuleConfig {
    /// `on` normalized to a list; absent becomes empty.
    pub fn on_patterns(&self) -> Vec<String> {
        boxed(&self.on)
    }

    /// `except` normalized to a list; absent becomes empty.
    pub fn except_patterns(&self) -> Vec<String> {
        boxed(&self.except)
    }

    /// `apply` normalized to a list; absent becomes empty.
    pub fn apply_names(&self) -> Vec<String> {
        boxed(&self.apply)
    }
}

/// Normalize a single-or-list field once, so downstream logic never inspects
/// the original shape.
fn boxed(field: &Option<OneOrMany<String>>) -> Vec<String> {
    match field {
        None => Vec::new(),
        Some(OneOrMany::One(v)) => vec![v.clone()],
        Some(OneOrMany::Many(vs)) => vs.clone(),
    }
}

/// A field that deserializes from either a bare value or a sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}
