//! The upstream agent contract.

use futures::stream::BoxStream;

use crate::error::AgentError;
use crate::events::RawEvent;

/// An ordered, single-pass stream of raw events for one run.
///
/// The stream ends by natural exhaustion on success. A yielded `Err`
/// terminates the run; no further items are read after it.
pub type RawEventStream = BoxStream<'static, Result<RawEvent, AgentError>>;

/// An executable agent that narrates its progress as a stream of raw events.
///
/// Implementations can be backed by any agent runtime (a multi-step graph,
/// a plain LLM client, a scripted double) as long as each execution yields
/// events in the order they occur. Consumers hold the only reference to a
/// returned stream and drop it to cancel the run.
///
/// # Example
///
/// ```rust
/// use futures::StreamExt;
/// use segue_core::{RawEvent, RawEventStream, Runnable};
///
/// struct SingleShot;
///
/// impl Runnable for SingleShot {
///     fn stream_events(&self, query: &str) -> RawEventStream {
///         futures::stream::iter(vec![Ok(RawEvent::model_chunk(query))]).boxed()
///     }
/// }
/// ```
pub trait Runnable: Send + Sync {
    /// Begin one execution for `query` and stream its raw events.
    fn stream_events(&self, query: &str) -> RawEventStream;
}
