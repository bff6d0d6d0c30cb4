// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recovery journey routes: visible activities, phase progress, completion
//! toggles and guided sessions.

use crate::error::{AppError, Result};
use crate::models::activity::UnknownPhase;
use crate::models::{ExerciseLog, Phase, RecoveryActivity, UserProfile};
use crate::services::eligibility::visible_activities;
use crate::services::progress::{
    is_phase_locked, journey_progress, phase_completion, phase_points, toggle_completion,
    ToggleOutcome,
};
use crate::services::session::SessionStart;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(get_activities))
        .route("/api/activities/{id}/toggle", post(toggle_activity))
        .route("/api/phases/{phase}", get(get_phase))
        .route("/api/sessions", post(start_session).get(get_sessions))
        .route("/api/sessions/complete", post(complete_session))
}

/// Catalog activity annotated for one profile.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityView {
    #[serde(flatten)]
    pub activity: RecoveryActivity,
    pub completed: bool,
    pub locked: bool,
}

impl ActivityView {
    fn new(profile: &UserProfile, activity: &RecoveryActivity) -> Self {
        Self {
            activity: activity.clone(),
            completed: profile.completed_activity_ids.contains(&activity.id),
            locked: is_phase_locked(profile, activity.phase),
        }
    }
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct JourneyResponse {
    pub current_phase: Phase,
    pub is_paused: bool,
    /// Completed share of the visible activities (0-100)
    pub progress: u8,
    pub activities: Vec<ActivityView>,
}

async fn get_activities(State(state): State<Arc<AppState>>) -> Json<JourneyResponse> {
    let profile = state.profiles.get();
    let visible = visible_activities(&profile, &state.catalog);

    Json(JourneyResponse {
        current_phase: profile.current_phase,
        is_paused: profile.journey_settings.is_paused,
        progress: journey_progress(&profile, &visible),
        activities: visible
            .iter()
            .map(|a| ActivityView::new(&profile, a))
            .collect(),
    })
}

// ─── Phases ──────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PhaseResponse {
    pub phase: Phase,
    pub locked: bool,
    /// Completed share of this phase's visible activities (0-100)
    pub completion: u8,
    pub points: u32,
    pub activities: Vec<ActivityView>,
}

async fn get_phase(
    State(state): State<Arc<AppState>>,
    Path(raw_phase): Path<String>,
) -> Result<Json<PhaseResponse>> {
    let phase: Phase = raw_phase
        .parse()
        .map_err(|e: UnknownPhase| AppError::BadRequest(e.to_string()))?;

    let profile = state.profiles.get();
    let in_phase: Vec<&RecoveryActivity> = visible_activities(&profile, &state.catalog)
        .into_iter()
        .filter(|a| a.phase == phase)
        .collect();

    Ok(Json(PhaseResponse {
        phase,
        locked: is_phase_locked(&profile, phase),
        completion: phase_completion(&profile, &in_phase),
        points: phase_points(&profile, &in_phase),
        activities: in_phase
            .iter()
            .map(|a| ActivityView::new(&profile, a))
            .collect(),
    }))
}

// ─── Completion Toggle ───────────────────────────────────────

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ToggleResponse {
    pub outcome: ToggleOutcome,
    pub progress: u8,
}

/// Direct completion toggle. Honors pause, ignores the lock.
async fn toggle_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<String>,
) -> Result<Json<ToggleResponse>> {
    if !state.catalog.contains(&activity_id) {
        return Err(AppError::NotFound(format!("Activity {}", activity_id)));
    }

    let (outcome, profile) = state.profiles.update(|profile| {
        let outcome = toggle_completion(profile, &activity_id);
        (outcome, profile.clone())
    })?;

    tracing::info!(activity_id = %activity_id, ?outcome, "Activity toggled");

    let visible = visible_activities(&profile, &state.catalog);
    Ok(Json(ToggleResponse {
        outcome,
        progress: journey_progress(&profile, &visible),
    }))
}

// ─── Sessions ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub activity_id: String,
}

/// Start a session for an activity on this profile's journey. Activities the
/// profile cannot see are not found.
async fn start_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartSessionRequest>,
) -> Result<Json<SessionStart>> {
    let profile = state.profiles.get();
    let activity = visible_activities(&profile, &state.catalog)
        .into_iter()
        .find(|a| a.id == req.activity_id)
        .ok_or_else(|| AppError::NotFound(format!("Activity {}", req.activity_id)))?;

    let started = state.sessions.start(&profile, activity, Utc::now())?;
    Ok(Json(started))
}

/// Finish the running session and mark its activity complete.
///
/// The exercise log is the record of the session; failing to save the
/// completion mark afterwards is logged, not returned.
async fn complete_session(State(state): State<Arc<AppState>>) -> Result<Json<ExerciseLog>> {
    let pace = state.profiles.get().journey_settings.pace;
    let log = state
        .sessions
        .finish(pace, Utc::now())?
        .ok_or_else(|| AppError::NotFound("No session in progress".to_string()))?;

    if let Err(e) = state.profiles.update(|profile| {
        profile
            .completed_activity_ids
            .insert(log.activity_id.clone());
    }) {
        tracing::warn!(
            activity_id = %log.activity_id,
            error = %e,
            "Failed to mark session activity complete"
        );
    }

    Ok(Json(log))
}

async fn get_sessions(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ExerciseLog>>> {
    Ok(Json(state.sessions.history()?))
}
