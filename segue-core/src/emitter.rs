//! Protocol-agnostic custom event emission for agent code.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{json, Value};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::events::{RawEvent, INTERNAL_EVENT_MARKER};

/// Lets agent code surface named signals to whatever frontend consumes the
/// run, without knowing about any particular protocol.
///
/// Each signal is wrapped in an `on_custom_event` raw event whose top-level
/// name is [`INTERNAL_EVENT_MARKER`], so downstream translators can
/// distinguish emitter traffic from any other custom events the runnable
/// produces. The wrapped payload carries `{event_id, name, payload}` with a
/// per-emitter id prefix and a running counter.
///
/// Sends are non-blocking: when the channel is full or closed the signal is
/// dropped rather than stalling the agent.
///
/// # Example
///
/// ```rust
/// use segue_core::EventEmitter;
/// use serde_json::json;
///
/// let (tx, mut rx) = tokio::sync::mpsc::channel(32);
/// let emitter = EventEmitter::new(tx);
///
/// emitter.emit("chart_generated", json!({"type": "line"}));
/// emitter.emit_progress("indexing", 0.4, Some("40 of 100 files"));
///
/// let event = rx.try_recv().unwrap();
/// assert_eq!(event.name.as_deref(), Some(segue_core::INTERNAL_EVENT_MARKER));
/// assert_eq!(event.data["name"], "chart_generated");
/// ```
pub struct EventEmitter {
    tx: mpsc::Sender<RawEvent>,
    id_prefix: String,
    counter: AtomicU64,
}

impl EventEmitter {
    /// Create an emitter that sends marked custom events into `tx`.
    pub fn new(tx: mpsc::Sender<RawEvent>) -> Self {
        Self {
            tx,
            id_prefix: Uuid::new_v4().simple().to_string()[..8].to_string(),
            counter: AtomicU64::new(0),
        }
    }

    /// Emit a named signal with an arbitrary payload.
    ///
    /// Returns true if the signal was accepted by the channel.
    pub fn emit(&self, name: impl Into<String>, payload: Value) -> bool {
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let event_id = format!("{}_{}", self.id_prefix, sequence);
        let name = name.into();

        let data = json!({
            "event_id": event_id,
            "name": name,
            "payload": payload,
        });

        self.tx
            .try_send(RawEvent::custom(INTERNAL_EVENT_MARKER, data))
            .is_ok()
    }

    /// Emit a progress update signal.
    ///
    /// `progress` is a fraction in `0.0..=1.0`.
    pub fn emit_progress(&self, step: impl Into<String>, progress: f64, details: Option<&str>) -> bool {
        let step = step.into();
        let payload = json!({
            "step": step,
            "progress": progress,
            "details": details,
        });
        self.emit("progress_update", payload)
    }

    /// Emit a chart display signal.
    pub fn emit_chart(&self, chart_type: impl Into<String>, data: Value, title: Option<&str>) -> bool {
        let chart_type = chart_type.into();
        let payload = json!({
            "type": chart_type,
            "data": data,
            "title": title,
        });
        self.emit("chart_generated", payload)
    }
}
