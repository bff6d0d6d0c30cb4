// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile editing, journey settings and the login streak.

use afterma_companion::db::MemoryKvStore;
use afterma_companion::models::{MaternityStage, UserProfile};
use afterma_companion::services::DisabledTriage;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_get_default_profile() {
    let (app, _state) = common::create_test_app();

    let response = app.oneshot(common::get("/api/profile")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["name"], "Guest");
    assert_eq!(body["maternity_stage"], "Postpartum");
    assert_eq!(body["current_phase"], "Month 1");
    assert_eq!(body["journey_settings"]["pace"], "gentle");
    assert_eq!(body["streak_count"], 0);
}

#[tokio::test]
async fn test_stage_change_moves_phase_into_new_taxonomy() {
    let (app, state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::send_json(
            "PUT",
            "/api/profile",
            json!({ "maternity_stage": "Pregnant-T2", "name": "Aditi" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["current_phase"], "Trimester 2");
    assert_eq!(body["name"], "Aditi");

    let response = app
        .oneshot(common::get("/api/activities"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    let ids: Vec<&str> = body["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    // Gentle pace hides the intensity-6 swim
    assert_eq!(ids, vec!["t2-prenatal-yoga", "t2-pelvic-floor-prep"]);

    assert_eq!(
        state.profiles.get().maternity_stage,
        MaternityStage::PregnantT2
    );
}

#[tokio::test]
async fn test_phase_from_other_stage_rejected() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(common::send_json(
            "PUT",
            "/api/profile",
            json!({ "maternity_stage": "TTC", "current_phase": "Month 2" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    // Nothing applied
    assert_eq!(
        state.profiles.get().maternity_stage,
        MaternityStage::Postpartum
    );
}

#[tokio::test]
async fn test_advancing_phase_unlocks() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::send_json(
            "PUT",
            "/api/profile",
            json!({ "current_phase": "Month 3" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(common::get("/api/phases/Month%202"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["locked"], false);
}

#[tokio::test]
async fn test_profile_validation() {
    let (app, _state) = common::create_test_app();

    for body in [
        json!({ "age": 5 }),
        json!({ "name": "" }),
        json!({ "delivery_date": "March 1st" }),
        json!({ "emergency_contact": "x".repeat(201) }),
    ] {
        let response = app
            .clone()
            .oneshot(common::send_json("PUT", "/api/profile", body.clone()))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "accepted {}",
            body
        );
    }
}

#[tokio::test]
async fn test_settings_update() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(common::send_json(
            "PUT",
            "/api/journey/settings",
            json!({ "pace": "moderate", "preferred_time": "evening", "goals": ["sleep better"] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let settings = state.profiles.get().journey_settings;
    assert_eq!(settings.goals, vec!["sleep better".to_string()]);
    assert!(!settings.is_paused);
}

#[tokio::test]
async fn test_login_same_day_counts_once() {
    let mut saved = UserProfile::new_default("2024-01-01");
    saved.streak_count = 4;
    let (app, state) = common::create_test_app_with(
        common::seeded_store(&saved),
        Arc::new(DisabledTriage),
    );

    let response = app
        .clone()
        .oneshot(common::post_empty("/api/login"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["incremented"], true);
    assert_eq!(body["streak_count"], 5);

    let response = app
        .oneshot(common::post_empty("/api/login"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["incremented"], false);
    assert_eq!(body["streak_count"], 5);

    assert_eq!(
        state.profiles.get().last_login_date,
        afterma_companion::time_utils::today_utc()
    );
}

#[tokio::test]
async fn test_fresh_profile_login_does_not_increment() {
    let (app, _state) = common::create_test_app_with(
        Arc::new(MemoryKvStore::new()),
        Arc::new(DisabledTriage),
    );

    let response = app
        .oneshot(common::post_empty("/api/login"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["incremented"], false);
    assert_eq!(body["streak_count"], 0);
}

#[tokio::test]
async fn test_trimester_change_moves_frontier() {
    let (app, state) = common::create_test_app();

    for stage in ["Pregnant-T1", "Pregnant-T2"] {
        let response = app
            .clone()
            .oneshot(common::send_json(
                "PUT",
                "/api/profile",
                json!({ "maternity_stage": stage }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(
        state.profiles.get().current_phase,
        afterma_companion::models::Phase::Trimester2
    );

    let response = app
        .clone()
        .oneshot(common::get("/api/activities"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["current_phase"], "Trimester 2");
    let activities = body["activities"].as_array().unwrap();
    assert!(!activities.is_empty());
    assert!(activities.iter().all(|a| a["locked"] == false));

    let response = app
        .oneshot(common::send_json(
            "POST",
            "/api/sessions",
            json!({ "activity_id": "t2-prenatal-yoga" }),
        ))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "started");
}

#[tokio::test]
async fn test_trimester_phase_must_match_stage() {
    let (app, state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::send_json(
            "PUT",
            "/api/profile",
            json!({ "maternity_stage": "Pregnant-T1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(common::send_json(
            "PUT",
            "/api/profile",
            json!({ "current_phase": "Trimester 3" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        state.profiles.get().current_phase,
        afterma_companion::models::Phase::Trimester1
    );
}
