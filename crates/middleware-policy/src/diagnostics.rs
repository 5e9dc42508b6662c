use std::sync::Mutex;

/// Sink for human-readable warnings about recoverable policy problems
/// (invalid rule shapes, unresolved middleware names).
///
/// Failures reported here are never fatal: the engine keeps installing the
/// remaining rules. Injecting the sink keeps the engine free of an implicit
/// output side channel and lets tests capture diagnostics as data.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, message: &str);
}

/// Default sink: route warnings through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, message: &str) {
        tracing::warn!(target: "middleware_policy", "{message}");
    }
}

/// Sink that stores every message, for asserting on diagnostics in tests.
#[derive(Debug, Default)]
pub struct CapturingSink {
    messages: Mutex<Vec<String>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl DiagnosticSink for CapturingSink {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
