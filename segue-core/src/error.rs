//! Error types for runnable event streams.

use thiserror::Error;

/// Errors surfaced by a runnable's event stream.
///
/// A runnable fails a run by yielding exactly one `Err` item, after which
/// the stream terminates. Categories are flattened by how consumers handle
/// them rather than by where they originate.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The underlying model call failed (provider outage, filtered content,
    /// context overflow)
    #[error("model error: {0}")]
    Model(String),

    /// A tool invocation failed in a way the agent could not recover from
    #[error("tool error: {0}")]
    Tool(String),

    /// The event stream itself was interrupted (connection lost, runtime
    /// shut down mid-run)
    #[error("stream interrupted: {0}")]
    Stream(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl AgentError {
    /// Returns true if the event stream was interrupted mid-run
    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    /// Returns true if this is a model error
    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    /// Returns true if this is a tool error
    pub fn is_tool(&self) -> bool {
        matches!(self, Self::Tool(_))
    }
}

/// Result type for segue-core operations
pub type Result<T> = std::result::Result<T, AgentError>;
