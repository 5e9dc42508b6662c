//! # middleware-policy
//!
//! Policy-driven middleware composition for remote-method frameworks. A
//! policy is an ordered list of rules mapping dotted `Namespace.method`
//! patterns to ordered middleware chains; per invocation the engine computes
//! the exact subset of middleware to run and executes it sequentially,
//! short-circuiting on the first error.
//!
//! The engine registers one hook per rule with the host framework, always
//! under the universal `*.*` pattern, and filters internally — so rule
//! precedence is exactly declaration order, regardless of how the host
//! orders hooks by pattern specificity.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use middleware_policy::{
//!     install, loader, DiagnosticSink, HookRegistrar, MiddlewareRegistry, TracingSink,
//! };
//!
//! # fn registry_from_host() -> MiddlewareRegistry { MiddlewareRegistry::new() }
//! # struct Remotes;
//! # impl HookRegistrar for Remotes {
//! #     fn register_before(&mut self, _: &str, _: middleware_policy::MiddlewareHandle) {}
//! # }
//! let policy = loader::load_policy("policy.yaml").unwrap();
//! let registry = registry_from_host();
//! let mut remotes = Remotes;
//! install(&policy, &registry, &mut remotes, &TracingSink);
//! ```

pub mod diagnostics;
pub mod dispatcher;
pub mod evaluator;
pub mod executor;
pub mod loader;
pub mod matcher;
pub mod middleware;
pub mod schema;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing;

// Re-export primary public API at crate root.
pub use diagnostics::{CapturingSink, DiagnosticSink, TracingSink};
pub use dispatcher::{install, UNIVERSAL_PATTERN};
pub use evaluator::ResolvedRule;
pub use executor::run_chain;
pub use loader::PolicyLoadError;
pub use matcher::matches;
pub use middleware::{
    CallContext, HookRegistrar, Middleware, MiddlewareHandle, MiddlewareRegistry, NamedHandle,
};
pub use schema::{OneOrMany, PolicyConfig, RuleConfig};
pub use validator::validate;
