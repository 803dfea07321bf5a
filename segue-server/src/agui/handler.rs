//! HTTP handlers for the AG-UI protocol endpoint.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::stream::Stream;
use futures::StreamExt;
use serde::Deserialize;

use super::adapter::Task;
use crate::error::ServerError;
use crate::state::AppState;

/// Request body for running an agent.
#[derive(Debug, Deserialize)]
pub struct AgentRequest {
    /// User message to send to the agent.
    pub message: String,
    /// Thread ID for conversation continuity.
    #[serde(default)]
    pub thread_id: Option<String>,
    /// Run ID for this specific run.
    #[serde(default)]
    pub run_id: Option<String>,
    /// Optional run options (included for AG-UI protocol compatibility).
    #[serde(default)]
    #[allow(dead_code)]
    pub options: RunOptions,
}

/// Options for agent run.
#[derive(Debug, Deserialize)]
pub struct RunOptions {
    /// Whether to stream responses (always true for AG-UI, included for
    /// compatibility).
    #[serde(default = "default_true")]
    #[allow(dead_code)]
    pub stream: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { stream: true }
    }
}

fn default_true() -> bool {
    true
}

/// Handle AG-UI protocol requests.
///
/// Accepts POST with an [`AgentRequest`] body and returns an SSE stream of
/// AG-UI events. Missing ids are generated; an empty message is rejected
/// with 400 before the stream starts.
pub async fn agui_handler(
    State(state): State<AppState>,
    Json(request): Json<AgentRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ServerError> {
    if request.message.is_empty() {
        return Err(ServerError::InvalidRequest(
            "message must not be empty".to_string(),
        ));
    }

    let run_id = request
        .run_id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let mut task = Task::new(run_id, request.message);
    if let Some(thread_id) = request.thread_id {
        task = task.with_thread_id(thread_id);
    }

    let stream = state.adapter.stream_events(task).map(|event| {
        let json = serde_json::to_string(&event).unwrap_or_else(|e| {
            serde_json::json!({
                "type": "RUN_ERROR",
                "message": format!("Failed to serialize event: {}", e)
            })
            .to_string()
        });
        Ok::<_, Infallible>(Event::default().data(json))
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
