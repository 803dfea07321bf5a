//! Stream adapter: one agent run rendered as AG-UI protocol events.

use std::sync::Arc;

use futures::stream::Stream;
use futures::StreamExt;
use segue_core::Runnable;
use serde::{Deserialize, Serialize};

use super::diagnostics::{DiagnosticSink, TracingSink};
use super::events::AguiEvent;
use super::translator::EventTranslator;

/// One agent run request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Run ID, unique per request.
    pub id: String,
    /// User query for the agent.
    pub query: String,
    /// Conversation thread ID, for multi-turn context tracking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

impl Task {
    /// Create a task with no thread affiliation.
    pub fn new(id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            query: query.into(),
            thread_id: None,
        }
    }

    /// Attach the task to a conversation thread.
    pub fn with_thread_id(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }

    /// The thread this run belongs to: the caller-supplied thread id, or
    /// the run id when none was given (a fresh single-run conversation).
    pub fn effective_thread_id(&self) -> &str {
        self.thread_id.as_deref().unwrap_or(&self.id)
    }
}

/// Adapts a [`Runnable`]'s raw event stream to the AG-UI protocol.
///
/// Each call to [`stream_events`](Self::stream_events) is one run with its
/// own translator state. The returned stream upholds the protocol envelope:
///
/// - `RUN_STARTED` is emitted first, before any upstream event is read.
/// - Raw events are translated in strict arrival order; the events of one
///   raw event are fully emitted before the next raw event is read.
/// - A raw event that fails translation is logged and skipped; the run
///   continues.
/// - The stream ends with exactly one terminal event: `RUN_FINISHED` on
///   normal upstream exhaustion, or `RUN_ERROR` when the upstream stream
///   fails. Nothing is emitted after the terminal event.
///
/// The stream is pull-based: it reads the upstream only when polled, so it
/// backpressures against a slow consumer, and dropping it cancels the
/// upstream iteration.
pub struct AguiAdapter<R: ?Sized> {
    runnable: Arc<R>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl<R: Runnable + ?Sized + 'static> AguiAdapter<R> {
    /// Create an adapter for the given runnable.
    pub fn new(runnable: R) -> Self
    where
        R: Sized,
    {
        Self::from_arc(Arc::new(runnable))
    }

    /// Create an adapter from an already-shared runnable.
    pub fn from_arc(runnable: Arc<R>) -> Self {
        Self {
            runnable,
            diagnostics: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink used for recoverable translation
    /// problems.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Run the agent for `task` and stream the run as protocol events.
    pub fn stream_events(&self, task: Task) -> impl Stream<Item = AguiEvent> + Send + 'static {
        let runnable = Arc::clone(&self.runnable);
        let diagnostics = Arc::clone(&self.diagnostics);

        async_stream::stream! {
            let run_id = task.id.clone();
            let thread_id = task.effective_thread_id().to_string();
            let mut translator = EventTranslator::with_diagnostics(Arc::clone(&diagnostics));

            tracing::info!(
                target: "segue::agui",
                run_id = %run_id,
                thread_id = %thread_id,
                "starting event stream"
            );

            yield AguiEvent::RunStarted {
                thread_id: thread_id.clone(),
                run_id: run_id.clone(),
            };

            let mut upstream = runnable.stream_events(&task.query);
            while let Some(item) = upstream.next().await {
                match item {
                    Ok(raw) => match translator.translate(&raw) {
                        Ok(events) => {
                            for event in events {
                                yield event;
                            }
                        }
                        Err(error) => {
                            diagnostics.warn(&format!("failed to translate event: {error}"));
                        }
                    },
                    Err(error) => {
                        tracing::error!(
                            target: "segue::agui",
                            run_id = %run_id,
                            error = %error,
                            "run failed"
                        );
                        yield AguiEvent::RunError {
                            message: error.to_string(),
                            code: None,
                        };
                        return;
                    }
                }
            }

            tracing::debug!(target: "segue::agui", run_id = %run_id, "run finished");
            yield AguiEvent::RunFinished { thread_id, run_id };
        }
    }
}

impl<R: ?Sized> Clone for AguiAdapter<R> {
    fn clone(&self) -> Self {
        Self {
            runnable: Arc::clone(&self.runnable),
            diagnostics: Arc::clone(&self.diagnostics),
        }
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
