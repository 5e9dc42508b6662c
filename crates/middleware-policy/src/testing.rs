//! Shared test stubs: recording/failing middleware and a minimal stand-in
//! for the host framework's hook table.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::middleware::{CallContext, HookRegistrar, Middleware, MiddlewareHandle, NamedHandle};

/// Ordered record of which middleware ran, shared across a whole scenario.
pub type RunLog = Arc<Mutex<Vec<String>>>;

/// Middleware that appends its name to a shared log and tags the context.
pub struct Recorder {
    name: String,
    log: RunLog,
}

impl Recorder {
    pub fn new(name: &str) -> (MiddlewareHandle, RunLog) {
        let log = RunLog::default();
        (Self::with_log(name, log.clone()), log)
    }

    pub fn with_log(name: &str, log: RunLog) -> MiddlewareHandle {
        Arc::new(Self {
            name: name.to_string(),
            log,
        })
    }
}

#[async_trait]
impl Middleware for Recorder {
    async fn handle(&self, ctx: &mut CallContext) -> anyhow::Result<()> {
        self.log.lock().unwrap().push(self.name.clone());
        ctx.set(self.name.clone(), serde_json::json!("ran"));
        Ok(())
    }
}

/// Middleware that always fails with the given message.
pub struct FailWith {
    message: String,
}

impl FailWith {
    pub fn new(message: &str) -> MiddlewareHandle {
        Arc::new(Self {
            message: message.to_string(),
        })
    }
}

#[async_trait]
impl Middleware for FailWith {
    async fn handle(&self, _ctx: &mut CallContext) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("{}", self.message))
    }
}

/// Build a chain of recorders sharing one log.
pub fn named_chain(names: &[&str]) -> (RunLog, Vec<NamedHandle>) {
    let log = RunLog::default();
    let chain = names
        .iter()
        .map(|name| NamedHandle {
            name: name.to_string(),
            handle: Recorder::with_log(name, log.clone()),
        })
        .collect();
    (log, chain)
}

/// Minimal host-framework stand-in: stores registered hooks and invokes them
/// in registration order, stopping at the first error, which is the contract
/// the dispatcher requires from the real host.
#[derive(Default)]
pub struct StubRemotes {
    pub hooks: Vec<(String, MiddlewareHandle)>,
}

impl StubRemotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patterns(&self) -> Vec<&str> {
        self.hooks.iter().map(|(p, _)| p.as_str()).collect()
    }

    /// Drive one invocation through every registered hook.
    pub async fn dispatch(&self, ctx: &mut CallContext) -> anyhow::Result<()> {
        for (_pattern, hook) in &self.hooks {
            hook.handle(ctx).await?;
        }
        Ok(())
    }
}

impl HookRegistrar for StubRemotes {
    fn register_before(&mut self, pattern: &str, hook: MiddlewareHandle) {
        self.hooks.push((pattern.to_string(), hook));
    }
}
