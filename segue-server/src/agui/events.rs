//! AG-UI protocol event types.
//!
//! These types represent the AG-UI event vocabulary segue emits for
//! agent-to-frontend communication.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// AG-UI protocol events.
///
/// Events are serialized with a `type` field in SCREAMING_SNAKE_CASE
/// as per the AG-UI specification. Once constructed an event is never
/// mutated; the stream adapter hands each one to the transport exactly as
/// built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AguiEvent {
    // ===== Lifecycle Events =====
    /// Agent run started. Always the first event of a run.
    RunStarted {
        /// Thread ID for conversation continuity.
        thread_id: String,
        /// Unique run ID for this execution.
        run_id: String,
    },

    /// Agent run finished successfully. Terminal.
    RunFinished {
        /// Thread ID for conversation continuity.
        thread_id: String,
        /// Unique run ID for this execution.
        run_id: String,
    },

    /// Agent run failed with an error. Terminal.
    RunError {
        /// Error message describing the failure.
        message: String,
        /// Optional error code.
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },

    // ===== Text Events =====
    /// One streamed chunk of assistant text.
    ///
    /// Chunks are self-contained deltas; no accumulated snapshot is carried.
    TextMessageChunk {
        /// Text delta to append.
        delta: String,
    },

    // ===== Tool Call Events =====
    /// Start of a tool call.
    ToolCallStart {
        /// Unique tool call ID.
        tool_call_id: String,
        /// Name of the tool being called.
        tool_call_name: String,
    },

    /// Arguments for a tool call, as serialized JSON text.
    ToolCallArgs {
        /// Tool call ID this belongs to.
        tool_call_id: String,
        /// JSON argument delta.
        delta: String,
    },

    /// End of a tool call.
    ToolCallEnd {
        /// Tool call ID that is complete.
        tool_call_id: String,
    },

    /// Result from a tool call.
    ToolCallResult {
        /// Unique message ID for this result.
        message_id: String,
        /// Tool call ID this result is for.
        tool_call_id: String,
        /// Result content (serialized JSON, or empty for null output).
        content: String,
    },

    // ===== Step Events =====
    /// A named execution step started.
    StepStarted {
        /// Step name.
        step_name: String,
    },

    /// A named execution step finished.
    StepFinished {
        /// Step name.
        step_name: String,
    },

    // ===== Thinking Events =====
    /// The agent entered a reasoning phase.
    ThinkingStart {
        /// Display title for the phase.
        title: String,
    },

    /// The agent left a reasoning phase.
    ThinkingEnd,

    // ===== Custom Events =====
    /// An application-defined signal forwarded from the agent.
    Custom {
        /// Signal name (e.g. "chart_generated").
        name: String,
        /// Signal payload.
        value: Value,
    },
}

impl AguiEvent {
    /// The serialized `type` tag for this event.
    ///
    /// Useful for assertions and log lines without a full serialization.
    pub fn event_type(&self) -> &'static str {
        match self {
            AguiEvent::RunStarted { .. } => "RUN_STARTED",
            AguiEvent::RunFinished { .. } => "RUN_FINISHED",
            AguiEvent::RunError { .. } => "RUN_ERROR",
            AguiEvent::TextMessageChunk { .. } => "TEXT_MESSAGE_CHUNK",
            AguiEvent::ToolCallStart { .. } => "TOOL_CALL_START",
            AguiEvent::ToolCallArgs { .. } => "TOOL_CALL_ARGS",
            AguiEvent::ToolCallEnd { .. } => "TOOL_CALL_END",
            AguiEvent::ToolCallResult { .. } => "TOOL_CALL_RESULT",
            AguiEvent::StepStarted { .. } => "STEP_STARTED",
            AguiEvent::StepFinished { .. } => "STEP_FINISHED",
            AguiEvent::ThinkingStart { .. } => "THINKING_START",
            AguiEvent::ThinkingEnd => "THINKING_END",
            AguiEvent::Custom { .. } => "CUSTOM",
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
