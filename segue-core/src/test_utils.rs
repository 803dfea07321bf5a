//! Test utilities for segue-core.
//!
//! This module provides scripted runnable doubles for testing consumers of
//! the event stream without a real agent runtime.
//!
//! Enable with the `test-utils` feature:
//!
//! ```toml
//! [dev-dependencies]
//! segue-core = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use futures::StreamExt;
//! use segue_core::test_utils::ScriptedRunnable;
//! use segue_core::{RawEvent, Runnable};
//! use serde_json::json;
//!
//! # async fn example() {
//! let runnable = ScriptedRunnable::new()
//!     .with_event(RawEvent::tool_start("search", json!({"q": "x"})))
//!     .with_event(RawEvent::tool_end("search", json!({"hits": 2})));
//!
//! let events: Vec<_> = runnable.stream_events("ignored").collect().await;
//! assert_eq!(events.len(), 2);
//! # }
//! ```

use futures::StreamExt;

use crate::error::AgentError;
use crate::events::RawEvent;
use crate::runnable::{RawEventStream, Runnable};

/// A runnable that replays a pre-programmed event script.
///
/// Every call to [`stream_events`](Runnable::stream_events) replays the same
/// script from the start, regardless of the query. Optionally the script
/// terminates with an error instead of completing normally.
#[derive(Clone, Default)]
pub struct ScriptedRunnable {
    events: Vec<RawEvent>,
    error: Option<String>,
}

impl ScriptedRunnable {
    /// Create a runnable with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one raw event to the script.
    pub fn with_event(mut self, event: RawEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Append several raw events to the script.
    pub fn with_events(mut self, events: impl IntoIterator<Item = RawEvent>) -> Self {
        self.events.extend(events);
        self
    }

    /// Terminate the script with a stream error after all queued events.
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

impl Runnable for ScriptedRunnable {
    fn stream_events(&self, _query: &str) -> RawEventStream {
        let mut items: Vec<Result<RawEvent, AgentError>> =
            self.events.iter().cloned().map(Ok).collect();
        if let Some(message) = &self.error {
            items.push(Err(AgentError::Stream(message.clone())));
        }
        futures::stream::iter(items).boxed()
    }
}
