//! AG-UI protocol support.
//!
//! This module translates the raw event stream of a
//! [`Runnable`](segue_core::Runnable) into the AG-UI protocol: an
//! event-based standard for connecting AI agents to user-facing
//! applications over SSE.
//!
//! # Pipeline
//!
//! ```text
//! runnable ──raw events──▶ AguiAdapter ──▶ EventTranslator ──▶ AguiEvent
//!                              │               │    │
//!                          envelope     RawEventKind  ToolCallTracker
//!                          (start/finish/error)
//! ```
//!
//! # Event Mapping
//!
//! | Raw event | AG-UI event(s) |
//! |-----------|----------------|
//! | `on_tool_start` | `TOOL_CALL_START`, `TOOL_CALL_ARGS` |
//! | `on_tool_end` | `TOOL_CALL_END`, `TOOL_CALL_RESULT` |
//! | `on_chat_model_stream` | `TEXT_MESSAGE_CHUNK` |
//! | `on_chain_start` / `on_chain_end` | `THINKING_START` / `THINKING_END` |
//! | `on_node_start` / `on_node_end` | `STEP_STARTED` / `STEP_FINISHED` |
//! | `on_custom_event` (marked) | `CUSTOM` |
//! | model/retriever lifecycle | none (accepted, silent) |
//! | anything else | none (logged, dropped) |

pub mod adapter;
pub mod classifier;
pub mod diagnostics;
pub mod events;
pub(crate) mod handler;
pub mod tracker;
pub mod translator;

pub use adapter::{AguiAdapter, Task};
pub use classifier::RawEventKind;
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use events::AguiEvent;
pub use tracker::ToolCallTracker;
pub use translator::{EventTranslator, TranslationError};
