use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

/// Per-invocation state handed to every middleware step.
///
/// Carries the dotted method identifier the host framework reports for the
/// call, plus a free-form value bag middleware can read and write (session
/// data, resolved account ids, and so on). A context lives for exactly one
/// dispatch and is never retained by the engine.
#[derive(Debug, Clone)]
pub struct CallContext {
    /// Dotted `Namespace.method` identifier for this invocation.
    pub method: String,
    /// Loosely-typed per-call data shared along the chain.
    pub values: serde_json::Map<String, serde_json::Value>,
}

impl CallContext {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            values: serde_json::Map::new(),
        }
    }

    /// Look up a value previously attached by an earlier middleware step.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Attach a value for later steps (and ultimately the host) to see.
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.values.insert(key.into(), value);
    }
}

/// One middleware step.
///
/// `handle` is invoked at most once per dispatch. Returning `Ok(())`
/// continues the chain; returning an error aborts the rest of the chain and
/// surfaces the error to the host framework unchanged.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, ctx: &mut CallContext) -> anyhow::Result<()>;
}

/// Shared handle to a registered middleware implementation.
pub type MiddlewareHandle = Arc<dyn Middleware>;

/// A middleware handle paired with the name it was registered under, kept so
/// diagnostics and trace events can identify the step.
#[derive(Clone)]
pub struct NamedHandle {
    pub name: String,
    pub handle: MiddlewareHandle,
}

impl std::fmt::Debug for NamedHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedHandle").field("name", &self.name).finish()
    }
}

/// Name-to-handle table built from the host framework once at startup and
/// read-only afterwards. Rule validation resolves `apply` names against it
/// so the dispatch path never performs a fallible lookup.
#[derive(Default, Clone)]
pub struct MiddlewareRegistry {
    by_name: HashMap<String, MiddlewareHandle>,
}

impl MiddlewareRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, handle: MiddlewareHandle) {
        self.by_name.insert(name.into(), handle);
    }

    pub fn get(&self, name: &str) -> Option<&MiddlewareHandle> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl std::fmt::Debug for MiddlewareRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.by_name.keys().collect();
        names.sort();
        f.debug_struct("MiddlewareRegistry")
            .field("names", &names)
            .finish()
    }
}

impl FromIterator<(String, MiddlewareHandle)> for MiddlewareRegistry {
    fn from_iter<I: IntoIterator<Item = (String, MiddlewareHandle)>>(iter: I) -> Self {
        Self {
            by_name: iter.into_iter().collect(),
        }
    }
}

/// Host-side registration surface.
///
/// The engine registers one hook per valid rule; the host framework must
/// invoke hooks for the same pattern in registration order and stop at the
/// first hook that returns an error. Hooks share the [`Middleware`] calling
/// contract.
pub trait HookRegistrar {
    fn register_before(&mut self, pattern: &str, hook: MiddlewareHandle);
}
