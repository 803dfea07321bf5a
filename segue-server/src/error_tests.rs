//! Tests for server error responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::*;

#[test]
fn test_invalid_request_maps_to_400() {
    let response = ServerError::InvalidRequest("message must not be empty".to_string())
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_internal_maps_to_500() {
    let response = ServerError::Internal("boom".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_response_body_carries_error_and_code() {
    let response = ServerError::InvalidRequest("bad input".to_string()).into_response();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "bad input");
    assert_eq!(body["code"], 400);
}

#[test]
fn test_build_error_message_names_the_fix() {
    let message = BuildError::NoEndpoints.to_string();
    assert!(message.contains("with_agui"));
}
