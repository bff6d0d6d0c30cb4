// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Triage, SOS, conception estimates and the emotional check-in.

use afterma_companion::db::MemoryKvStore;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_triage_answer() {
    let (app, _state) = common::create_test_app_with(
        Arc::new(MemoryKvStore::new()),
        Arc::new(common::CannedTriage("Rest and keep the incision dry.")),
    );

    let response = app
        .oneshot(common::send_json(
            "POST",
            "/api/triage",
            json!({ "messages": ["My scar feels warm"] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "answered");
    assert_eq!(body["content"], "Rest and keep the incision dry.");
}

#[tokio::test]
async fn test_triage_unavailable_is_not_an_error() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::send_json(
            "POST",
            "/api/triage",
            json!({ "messages": ["Is this normal?"] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["retryable"], false);
}

#[tokio::test]
async fn test_triage_requires_a_message() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::send_json(
            "POST",
            "/api/triage",
            json!({ "messages": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sos_double_tap() {
    let (app, state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::post_empty("/api/sos/tap"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "armed");
    assert!(state.sos.is_armed());

    let response = app
        .oneshot(common::post_empty("/api/sos/tap"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "triggered");
    assert!(!state.sos.is_armed());
}

#[tokio::test]
async fn test_fertility_estimate() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::send_json(
            "POST",
            "/api/fertility",
            json!({ "last_period_date": "2024-01-01", "cycle_length_days": 28 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["ovulation_date"], "2024-01-15");
    assert_eq!(body["pregnancy_test_date"], "2024-01-29");

    let response = app
        .oneshot(common::send_json(
            "POST",
            "/api/fertility",
            json!({ "last_period_date": "2024-01-01", "cycle_length_days": 7 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_checkin() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::send_json(
            "POST",
            "/api/checkin",
            json!({ "answers": [1, 0, 2, 1, 0, 3, 1, 0, 0, 1] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["total"], 9);
    assert_eq!(body["answered"], 10);

    let response = app
        .oneshot(common::send_json(
            "POST",
            "/api/checkin",
            json!({ "answers": [1, 2] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
