//! Raw execution events produced by runnables.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Marker placed in the top-level `name` field of custom events emitted
/// through [`EventEmitter`](crate::emitter::EventEmitter).
///
/// Translators forward a custom event to the frontend only when it carries
/// this marker; any other custom traffic a runnable produces is passed over.
pub const INTERNAL_EVENT_MARKER: &str = "agent_custom_event";

/// A single execution notification from a running agent.
///
/// Raw events use an open vocabulary: `event` tags what happened
/// (`"on_tool_start"`, `"on_chat_model_stream"`, ...), `name` carries the
/// tool, node, or chain name when the producer includes one, and `data` is a
/// kind-specific payload.
///
/// Producers put tool and chain names at the event's top level, not inside
/// `data`. Consumers must read them from there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// Event kind tag (open vocabulary)
    pub event: String,

    /// Name of the originating tool, node, or chain, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Kind-specific payload
    #[serde(default)]
    pub data: Value,
}

impl RawEvent {
    /// Create a raw event with the given kind tag and no name or payload.
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            name: None,
            data: Value::Null,
        }
    }

    /// Set the top-level name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the payload.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// A tool invocation starting. `input` is the tool's input value.
    pub fn tool_start(tool_name: impl Into<String>, input: Value) -> Self {
        Self::new("on_tool_start")
            .with_name(tool_name)
            .with_data(json!({ "input": input }))
    }

    /// A tool invocation finishing. `output` is the tool's output value.
    pub fn tool_end(tool_name: impl Into<String>, output: Value) -> Self {
        Self::new("on_tool_end")
            .with_name(tool_name)
            .with_data(json!({ "output": output }))
    }

    /// One streamed model token chunk.
    pub fn model_chunk(content: impl Into<String>) -> Self {
        let content = content.into();
        Self::new("on_chat_model_stream").with_data(json!({ "chunk": { "content": content } }))
    }

    /// A chain beginning execution.
    pub fn chain_start(chain_name: impl Into<String>) -> Self {
        Self::new("on_chain_start").with_name(chain_name)
    }

    /// A chain finishing execution.
    pub fn chain_end(chain_name: impl Into<String>) -> Self {
        Self::new("on_chain_end").with_name(chain_name)
    }

    /// A graph node beginning execution.
    pub fn node_start(node_name: impl Into<String>) -> Self {
        Self::new("on_node_start").with_name(node_name)
    }

    /// A graph node finishing execution.
    pub fn node_end(node_name: impl Into<String>) -> Self {
        Self::new("on_node_end").with_name(node_name)
    }

    /// A custom event with an arbitrary top-level name and payload.
    ///
    /// Use [`EventEmitter`](crate::emitter::EventEmitter) to produce custom
    /// events that translators forward; this constructor is for arbitrary
    /// custom traffic.
    pub fn custom(name: impl Into<String>, data: Value) -> Self {
        Self::new("on_custom_event").with_name(name).with_data(data)
    }
}
