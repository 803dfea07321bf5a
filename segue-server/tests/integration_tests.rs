//! Integration tests for segue-server.
//!
//! These tests verify the full request→adapter→translator→SSE flow.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use segue_core::test_utils::ScriptedRunnable;
use segue_core::{RawEvent, INTERNAL_EVENT_MARKER};
use segue_server::SegueRouter;
use serde_json::json;
use tower::ServiceExt;

/// Helper to create an SSE request body.
fn sse_request(message: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/copilotkit")
        .header("Content-Type", "application/json")
        .body(Body::from(format!(r#"{{"message": "{}"}}"#, message)))
        .unwrap()
}

/// Collect SSE events from a response body.
async fn collect_sse_events(body: Body) -> Vec<String> {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let text = String::from_utf8_lossy(&bytes);
    text.lines()
        .filter(|line| line.starts_with("data: "))
        .map(|line| line.strip_prefix("data: ").unwrap().to_string())
        .collect()
}

/// Extract event type names from SSE event JSON strings.
fn extract_event_types(events: &[String]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| {
            serde_json::from_str::<serde_json::Value>(e)
                .ok()
                .and_then(|v| v.get("type").and_then(|t| t.as_str().map(String::from)))
        })
        .collect()
}

fn app(runnable: ScriptedRunnable) -> axum::Router {
    SegueRouter::new(runnable)
        .with_agui("/api/copilotkit")
        .build()
        .unwrap()
}

// ============================================================================
// SSE Stream Tests
// ============================================================================

#[tokio::test]
async fn test_sse_stream_format() {
    let app = app(ScriptedRunnable::new().with_event(RawEvent::model_chunk("Hello, world!")));

    let response = app.oneshot(sse_request("Hi")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/event-stream"
    );

    let events = collect_sse_events(response.into_body()).await;
    for event in &events {
        assert!(
            serde_json::from_str::<serde_json::Value>(event).is_ok(),
            "Event should be valid JSON: {}",
            event
        );
    }
}

#[tokio::test]
async fn test_sse_event_sequence() {
    let app = app(ScriptedRunnable::new()
        .with_event(RawEvent::model_chunk("Test "))
        .with_event(RawEvent::model_chunk("response")));

    let response = app.oneshot(sse_request("Hello")).await.unwrap();
    let events = collect_sse_events(response.into_body()).await;
    let event_types = extract_event_types(&events);

    assert_eq!(
        event_types,
        vec![
            "RUN_STARTED",
            "TEXT_MESSAGE_CHUNK",
            "TEXT_MESSAGE_CHUNK",
            "RUN_FINISHED"
        ]
    );
}

#[tokio::test]
async fn test_sse_tool_call_events() {
    let app = app(ScriptedRunnable::new()
        .with_event(RawEvent::tool_start("calculator", json!({"expression": "2+2"})))
        .with_event(RawEvent::tool_end("calculator", json!({"value": 4}))));

    let response = app.oneshot(sse_request("What is 2+2?")).await.unwrap();
    let events = collect_sse_events(response.into_body()).await;
    let event_types = extract_event_types(&events);

    assert_eq!(
        event_types,
        vec![
            "RUN_STARTED",
            "TOOL_CALL_START",
            "TOOL_CALL_ARGS",
            "TOOL_CALL_END",
            "TOOL_CALL_RESULT",
            "RUN_FINISHED"
        ]
    );

    // The whole sequence correlates through one tool_call_id
    let parsed: Vec<serde_json::Value> = events
        .iter()
        .map(|e| serde_json::from_str(e).unwrap())
        .collect();
    let call_id = parsed[1]["tool_call_id"].as_str().unwrap();
    assert!(!call_id.is_empty());
    for event in &parsed[2..5] {
        assert_eq!(event["tool_call_id"], call_id);
    }
    assert_eq!(parsed[4]["message_id"], call_id);
}

#[tokio::test]
async fn test_sse_custom_event_forwarding() {
    let app = app(ScriptedRunnable::new().with_event(RawEvent::custom(
        INTERNAL_EVENT_MARKER,
        json!({
            "event_id": "ab12cd34_1",
            "name": "chart_generated",
            "payload": {"type": "line"}
        }),
    )));

    let response = app.oneshot(sse_request("chart it")).await.unwrap();
    let events = collect_sse_events(response.into_body()).await;

    let custom = events
        .iter()
        .find(|e| e.contains("CUSTOM"))
        .expect("Should have CUSTOM event");
    let parsed: serde_json::Value = serde_json::from_str(custom).unwrap();
    assert_eq!(parsed["name"], "chart_generated");
    assert_eq!(parsed["value"]["type"], "line");
}

#[tokio::test]
async fn test_sse_uses_provided_thread_and_run_ids() {
    let app = app(ScriptedRunnable::new());

    let request = Request::builder()
        .method("POST")
        .uri("/api/copilotkit")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"message": "Hi", "thread_id": "thread-123", "run_id": "run-456"}"#,
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let events = collect_sse_events(response.into_body()).await;

    let run_started = events
        .iter()
        .find(|e| e.contains("RUN_STARTED"))
        .expect("Should have RUN_STARTED");

    let parsed: serde_json::Value = serde_json::from_str(run_started).unwrap();
    assert_eq!(parsed["thread_id"], "thread-123");
    assert_eq!(parsed["run_id"], "run-456");
}

#[tokio::test]
async fn test_sse_generates_ids_when_not_provided() {
    let app = app(ScriptedRunnable::new());

    let response = app.oneshot(sse_request("Hi")).await.unwrap();
    let events = collect_sse_events(response.into_body()).await;

    let run_started = events
        .iter()
        .find(|e| e.contains("RUN_STARTED"))
        .expect("Should have RUN_STARTED");

    let parsed: serde_json::Value = serde_json::from_str(run_started).unwrap();
    let thread_id = parsed["thread_id"].as_str().unwrap();
    let run_id = parsed["run_id"].as_str().unwrap();

    assert!(
        uuid::Uuid::parse_str(run_id).is_ok(),
        "run_id should be valid UUID"
    );
    // No thread supplied: the run id doubles as the thread id
    assert_eq!(thread_id, run_id);
}

#[tokio::test]
async fn test_multiple_requests_produce_consistent_events() {
    let runnable = ScriptedRunnable::new().with_event(RawEvent::model_chunk("Response"));

    let mut event_counts = Vec::new();
    for _ in 0..3 {
        let app = app(runnable.clone());
        let response = app.oneshot(sse_request("Hi")).await.unwrap();
        let events = collect_sse_events(response.into_body()).await;
        event_counts.push(events.len());
    }

    assert!(
        event_counts.iter().all(|&c| c == event_counts[0]),
        "Event counts should be consistent: {:?}",
        event_counts
    );
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_sse_error_event_on_upstream_failure() {
    let app = app(ScriptedRunnable::new()
        .with_event(RawEvent::chain_start("agent"))
        .failing_with("ConnectionLost"));

    let response = app.oneshot(sse_request("Hi")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK); // SSE streams errors as events

    let events = collect_sse_events(response.into_body()).await;
    let event_types = extract_event_types(&events);
    assert_eq!(
        event_types,
        vec!["RUN_STARTED", "THINKING_START", "RUN_ERROR"]
    );

    let error = events.last().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(error).unwrap();
    assert!(parsed["message"]
        .as_str()
        .unwrap()
        .contains("ConnectionLost"));
}

#[tokio::test]
async fn test_malformed_events_do_not_break_the_stream() {
    let app = app(ScriptedRunnable::new()
        .with_event(RawEvent::new("on_mystery_event"))
        .with_event(RawEvent::tool_end("never_started", json!({})))
        .with_event(RawEvent::model_chunk("ok")));

    let response = app.oneshot(sse_request("Hi")).await.unwrap();
    let events = collect_sse_events(response.into_body()).await;
    let event_types = extract_event_types(&events);

    assert_eq!(
        event_types,
        vec!["RUN_STARTED", "TEXT_MESSAGE_CHUNK", "RUN_FINISHED"]
    );
}

#[tokio::test]
async fn test_invalid_request_body_returns_error() {
    let app = app(ScriptedRunnable::new());

    let request = Request::builder()
        .method("POST")
        .uri("/api/copilotkit")
        .header("Content-Type", "application/json")
        .body(Body::from("not valid json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    let app = app(ScriptedRunnable::new());

    let response = app.oneshot(sse_request("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().unwrap().contains("message"));
}
