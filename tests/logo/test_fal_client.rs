// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for FalClient against a mock FAL endpoint

use codequal_logo_relay::logo::{FalClient, FalImageRequest, ImageProvider, LogoError};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn client_for(server: &MockServer) -> FalClient {
    FalClient::new(&server.url("/flux"), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_generate_sends_key_header_and_body() {
    let server = MockServer::start_async().await;
    let fal = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/flux")
                .header("authorization", "Key abc123")
                .json_body(serde_json::to_value(FalImageRequest::logo()).unwrap());
            then.status(200)
                .json_body(json!({"images": [{"url": "https://cdn.fal.ai/x.png"}]}));
        })
        .await;

    let result = client_for(&server)
        .generate("abc123", &FalImageRequest::logo())
        .await
        .unwrap();

    assert_eq!(result.first_image_url(), Some("https://cdn.fal.ai/x.png"));
    fal.assert_async().await;
}

#[tokio::test]
async fn test_generate_non_200_is_upstream_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/flux");
            then.status(503).body("model warming up");
        })
        .await;

    let error = client_for(&server)
        .generate("k", &FalImageRequest::logo())
        .await
        .unwrap_err();

    match error {
        LogoError::Upstream { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "model warming up");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_non_200_success_status_is_upstream_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/flux");
            then.status(202).json_body(json!({"request_id": "queued"}));
        })
        .await;

    let error = client_for(&server)
        .generate("k", &FalImageRequest::logo())
        .await
        .unwrap_err();

    assert!(matches!(error, LogoError::Upstream { status: 202, .. }));
}

#[tokio::test]
async fn test_generate_invalid_json_is_unexpected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/flux");
            then.status(200).body("not json");
        })
        .await;

    let error = client_for(&server)
        .generate("k", &FalImageRequest::logo())
        .await
        .unwrap_err();

    assert!(matches!(error, LogoError::Unexpected(_)));
}

#[tokio::test]
async fn test_generate_timeout() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/flux");
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(json!({"images": []}));
        })
        .await;

    let client = FalClient::new(&server.url("/flux"), Duration::from_secs(1)).unwrap();
    let error = client
        .generate("k", &FalImageRequest::logo())
        .await
        .unwrap_err();

    assert!(matches!(error, LogoError::Timeout { timeout_secs: 1 }));
}
