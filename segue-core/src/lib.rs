//! # Segue Core
//!
//! Core contracts for bridging event-emitting agents to streaming frontends.
//!
//! A [`Runnable`] is anything that can execute one query and narrate its
//! progress as an ordered, asynchronous stream of [`RawEvent`]s: tool
//! invocations, model token deltas, chain and node boundaries, custom
//! signals. Raw events use an open string vocabulary so agent runtimes can
//! evolve independently of any consumer; the `segue-server` crate translates
//! the recognized subset into AG-UI protocol events.
//!
//! ## Implementing a runnable
//!
//! ```rust
//! use futures::StreamExt;
//! use segue_core::{RawEvent, RawEventStream, Runnable};
//!
//! struct EchoAgent;
//!
//! impl Runnable for EchoAgent {
//!     fn stream_events(&self, query: &str) -> RawEventStream {
//!         let events = vec![
//!             Ok(RawEvent::chain_start("echo")),
//!             Ok(RawEvent::model_chunk(query)),
//!             Ok(RawEvent::chain_end("echo")),
//!         ];
//!         futures::stream::iter(events).boxed()
//!     }
//! }
//! ```
//!
//! ## Emitting custom signals
//!
//! Agent code that wants to surface named signals to the frontend (a chart,
//! a progress update) uses [`EventEmitter`], which wraps each signal in a
//! marked custom event that translators recognize:
//!
//! ```rust
//! use segue_core::EventEmitter;
//! use serde_json::json;
//!
//! let (tx, _rx) = tokio::sync::mpsc::channel(32);
//! let emitter = EventEmitter::new(tx);
//! emitter.emit("chart_generated", json!({"type": "line"}));
//! ```
//!
//! ## Feature Flags
//!
//! - `test-utils` - Scripted runnable doubles for testing consumers

pub mod emitter;
pub mod error;
pub mod events;
pub mod runnable;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use emitter::EventEmitter;
pub use error::{AgentError, Result};
pub use events::{RawEvent, INTERNAL_EVENT_MARKER};
pub use runnable::{RawEventStream, Runnable};
