//! Translation of raw agent events into AG-UI protocol events.

use std::sync::Arc;

use segue_core::events::{RawEvent, INTERNAL_EVENT_MARKER};
use serde_json::Value;

use super::classifier::RawEventKind;
use super::diagnostics::{DiagnosticSink, TracingSink};
use super::events::AguiEvent;
use super::tracker::ToolCallTracker;

/// Maximum number of characters of payload included in diagnostics.
const PAYLOAD_PREVIEW_CHARS: usize = 100;

/// Error raised when a recognized raw event cannot be translated.
///
/// The stream adapter logs these and continues with the next raw event; a
/// single malformed event never terminates a run.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    /// A marked custom event did not carry a name inside its data.
    #[error("custom event data is missing its inner name")]
    MissingCustomName,

    /// A payload value could not be rendered as JSON text.
    #[error("failed to serialize {field}: {source}")]
    Serialize {
        /// Which payload field was being serialized.
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Translates raw agent events into AG-UI protocol events.
///
/// One translator belongs to exactly one run. It owns the run's
/// [`ToolCallTracker`] and produces zero or more protocol events per raw
/// event, in the order the protocol requires. Unrecognized event kinds and
/// orphaned tool ends are reported through the diagnostic sink and produce
/// no events.
pub struct EventTranslator {
    tracker: ToolCallTracker,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl EventTranslator {
    /// Create a translator that reports diagnostics through `tracing`.
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingSink))
    }

    /// Create a translator with an injected diagnostic sink.
    pub fn with_diagnostics(diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            tracker: ToolCallTracker::new(),
            diagnostics,
        }
    }

    /// Translate one raw event into zero or more protocol events.
    pub fn translate(&mut self, event: &RawEvent) -> Result<Vec<AguiEvent>, TranslationError> {
        let Some(kind) = RawEventKind::from_tag(&event.event) else {
            self.diagnostics.warn(&format!(
                "unknown event kind: {}, data: {}",
                event.event,
                payload_preview(&event.data)
            ));
            return Ok(Vec::new());
        };

        match kind {
            RawEventKind::ToolStart => self.translate_tool_start(event),
            RawEventKind::ToolEnd => self.translate_tool_end(event),
            RawEventKind::ChatModelStream => Ok(translate_model_chunk(&event.data)),
            RawEventKind::ChainStart => Ok(vec![AguiEvent::ThinkingStart {
                title: display_name(event),
            }]),
            RawEventKind::ChainEnd => Ok(vec![AguiEvent::ThinkingEnd]),
            RawEventKind::NodeStart => Ok(vec![AguiEvent::StepStarted {
                step_name: display_name(event),
            }]),
            RawEventKind::NodeEnd => Ok(vec![AguiEvent::StepFinished {
                step_name: display_name(event),
            }]),
            RawEventKind::CustomEvent => self.translate_custom(event),
            // Recognized but deliberately silent kinds
            RawEventKind::ChatModelStart
            | RawEventKind::ChatModelEnd
            | RawEventKind::ChainStream
            | RawEventKind::LlmStart
            | RawEventKind::LlmStream
            | RawEventKind::LlmEnd
            | RawEventKind::RetrieverStart
            | RawEventKind::RetrieverEnd => Ok(Vec::new()),
        }
    }

    fn translate_tool_start(
        &mut self,
        event: &RawEvent,
    ) -> Result<Vec<AguiEvent>, TranslationError> {
        // Tool name lives at the event's top level, not in the payload.
        let tool_name = event.name.as_deref().unwrap_or("unknown");
        let input = match event.data.get("input") {
            Some(input) => input.clone(),
            None => Value::Object(Default::default()),
        };

        let call_id = self.tracker.start_call(tool_name);

        Ok(vec![
            AguiEvent::ToolCallStart {
                tool_call_id: call_id.clone(),
                tool_call_name: tool_name.to_string(),
            },
            AguiEvent::ToolCallArgs {
                tool_call_id: call_id,
                delta: serialize_payload(&input, "tool input")?,
            },
        ])
    }

    fn translate_tool_end(&mut self, event: &RawEvent) -> Result<Vec<AguiEvent>, TranslationError> {
        // Unlike the input on the start event, output sits in the payload
        // while the name stays top-level.
        let tool_name = event.name.as_deref().unwrap_or("unknown");

        let Some(call_id) = self.tracker.end_call(tool_name) else {
            self.diagnostics
                .warn(&format!("no active call found for tool: {tool_name}"));
            return Ok(Vec::new());
        };

        let content = match event.data.get("output") {
            None | Some(Value::Null) => String::new(),
            Some(output) => serialize_payload(output, "tool output")?,
        };

        Ok(vec![
            AguiEvent::ToolCallEnd {
                tool_call_id: call_id.clone(),
            },
            AguiEvent::ToolCallResult {
                // The call id doubles as the result's message id
                message_id: call_id.clone(),
                tool_call_id: call_id,
                content,
            },
        ])
    }

    fn translate_custom(&self, event: &RawEvent) -> Result<Vec<AguiEvent>, TranslationError> {
        // Only forward custom events produced through the EventEmitter
        // convention; anything else is not translator traffic.
        if event.name.as_deref() != Some(INTERNAL_EVENT_MARKER) {
            return Ok(Vec::new());
        }

        let name = event
            .data
            .get("name")
            .and_then(Value::as_str)
            .ok_or(TranslationError::MissingCustomName)?;
        let value = event.data.get("payload").cloned().unwrap_or(Value::Null);

        Ok(vec![AguiEvent::Custom {
            name: name.to_string(),
            value,
        }])
    }
}

impl Default for EventTranslator {
    fn default() -> Self {
        Self::new()
    }
}

fn translate_model_chunk(data: &Value) -> Vec<AguiEvent> {
    match data
        .get("chunk")
        .and_then(|chunk| chunk.get("content"))
        .and_then(Value::as_str)
    {
        Some(content) if !content.is_empty() => vec![AguiEvent::TextMessageChunk {
            delta: content.to_string(),
        }],
        _ => Vec::new(),
    }
}

/// Top-level event name for display, defaulted when the producer omits it.
fn display_name(event: &RawEvent) -> String {
    event.name.clone().unwrap_or_else(|| "Unknown".to_string())
}

/// Render a payload value as JSON text.
///
/// `serde_json` keeps map keys sorted and passes non-ASCII through
/// unescaped, so the output is deterministic and parseable downstream.
fn serialize_payload(value: &Value, field: &'static str) -> Result<String, TranslationError> {
    serde_json::to_string(value).map_err(|source| TranslationError::Serialize { field, source })
}

/// Bounded payload rendering for diagnostics.
fn payload_preview(data: &Value) -> String {
    let text = data.to_string();
    match text.char_indices().nth(PAYLOAD_PREVIEW_CHARS) {
        Some((index, _)) => format!("{}...", &text[..index]),
        None => text,
    }
}

#[cfg(test)]
#[path = "translator_tests.rs"]
mod tests;
