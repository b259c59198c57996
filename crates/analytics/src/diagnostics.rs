//! Sink for non-fatal warnings raised during a run.

use std::sync::{Arc, Mutex};

/// Receives human-readable warnings about skipped input.
///
/// Correctness of a run never depends on what the sink does with them.
pub trait Diagnostics: Send + Sync {
    /// Called once per skipped record or item, in input order.
    fn warn(&self, message: &str);
}

/// Forwards warnings to `tracing` at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "sales_analytics", "{message}");
    }
}

/// Discards all warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn warn(&self, _message: &str) {}
}

/// Keeps warnings in memory so callers can inspect or report them.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CollectingDiagnostics {
    messages: Arc<Mutex<Vec<String>>>,
}

impl CollectingDiagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all warnings received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Returns the number of warnings received so far.
    pub fn len(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Returns true if no warnings were received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn warn(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
