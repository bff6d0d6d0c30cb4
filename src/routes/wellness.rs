// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wellness routes: AI triage, SOS confirmation, conception estimates and
//! the emotional check-in.

use crate::error::{AppError, Result};
use crate::services::checkin::{self, CheckinResult};
use crate::services::fertility::{self, FertilityEstimate};
use crate::services::sos::SosTap;
use crate::services::triage::{triage, TriageReply};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/triage", post(run_triage))
        .route("/api/sos/tap", post(tap_sos))
        .route("/api/fertility", post(estimate_fertility))
        .route("/api/checkin", post(submit_checkin))
}

// ─── Triage ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct TriageRequest {
    #[validate(length(min = 1, max = 50))]
    pub messages: Vec<String>,
}

/// Always 200: analyzer failures come back as a retryable `Unavailable`.
async fn run_triage(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TriageRequest>,
) -> Result<Json<TriageReply>> {
    req.validate()?;

    let profile = state.profiles.get();
    let reply = triage(state.triage.as_ref(), &req.messages, &profile).await;
    Ok(Json(reply))
}

// ─── SOS ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SosResponse {
    pub status: SosTap,
}

async fn tap_sos(State(state): State<Arc<AppState>>) -> Json<SosResponse> {
    Json(SosResponse {
        status: state.sos.tap(),
    })
}

// ─── Conception ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FertilityRequest {
    pub last_period_date: NaiveDate,
    pub cycle_length_days: u32,
}

async fn estimate_fertility(
    Json(req): Json<FertilityRequest>,
) -> Result<Json<FertilityEstimate>> {
    let estimate = fertility::estimate(req.last_period_date, req.cycle_length_days)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(Json(estimate))
}

// ─── Check-in ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CheckinRequest {
    pub answers: Vec<u8>,
}

async fn submit_checkin(Json(req): Json<CheckinRequest>) -> Result<Json<CheckinResult>> {
    let result = checkin::score(&req.answers).map_err(|e| AppError::BadRequest(e.to_string()))?;
    tracing::info!(total = result.total, "Emotional check-in recorded");
    Ok(Json(result))
}
