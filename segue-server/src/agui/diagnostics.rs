//! Diagnostic reporting for the translation pipeline.

/// Sink for diagnostic messages produced during event translation.
///
/// The translator and stream adapter report recoverable oddities (unknown
/// event kinds, orphaned tool ends, per-event translation failures) through
/// this trait instead of logging directly, so tests can capture diagnostics
/// without a logging backend.
///
/// # Example
/// ```
/// use segue_server::agui::diagnostics::DiagnosticSink;
///
/// let sink = |message: &str| eprintln!("translator: {message}");
/// sink.warn("no active call found for tool: ghost");
/// ```
pub trait DiagnosticSink: Send + Sync {
    /// Report one recoverable problem.
    fn warn(&self, message: &str);
}

/// Blanket implementation for closures
impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn warn(&self, message: &str) {
        self(message)
    }
}

/// Default sink that forwards diagnostics to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "segue::agui", "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_closures_are_sinks() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let captured_for_sink = captured.clone();
        let sink = move |message: &str| {
            captured_for_sink.lock().unwrap().push(message.to_string());
        };

        sink.warn("first");
        sink.warn("second");

        assert_eq!(*captured.lock().unwrap(), vec!["first", "second"]);
    }
}
