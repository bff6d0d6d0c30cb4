// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile, journey settings and login routes.

use crate::error::{AppError, Result};
use crate::models::{DeliveryType, MaternityStage, Pace, Phase, PreferredTime, UserProfile};
use crate::services::streak::record_login;
use crate::time_utils::{parse_calendar_day, today_utc};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", get(get_profile).put(update_profile))
        .route("/api/journey/settings", put(update_settings))
        .route("/api/login", post(login))
}

// ─── Profile ─────────────────────────────────────────────────

async fn get_profile(State(state): State<Arc<AppState>>) -> Json<UserProfile> {
    Json(state.profiles.get())
}

/// Partial profile edit. Absent fields are left alone.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 12, max = 70))]
    pub age: Option<u32>,
    pub delivery_date: Option<String>,
    pub delivery_type: Option<DeliveryType>,
    pub maternity_stage: Option<MaternityStage>,
    pub current_phase: Option<Phase>,
    #[validate(length(max = 2000))]
    pub medical_history: Option<String>,
    #[validate(length(max = 2000))]
    pub allergies: Option<String>,
    #[validate(length(max = 200))]
    pub emergency_contact: Option<String>,
}

/// Apply a profile edit.
///
/// Changing stage moves the frontier to the new stage's starting phase unless
/// the new stage admits the old phase. An explicit phase the resulting stage
/// does not admit is rejected.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<UserProfile>> {
    update.validate()?;
    if let Some(raw) = &update.delivery_date {
        if parse_calendar_day(raw).is_none() {
            return Err(AppError::BadRequest(
                "delivery_date must be YYYY-MM-DD".to_string(),
            ));
        }
    }

    let current = state.profiles.get();
    let stage = update.maternity_stage.unwrap_or(current.maternity_stage);
    if let Some(phase) = update.current_phase {
        if !stage.admits_phase(phase) {
            return Err(AppError::BadRequest(format!(
                "Phase {} does not belong to stage {:?}",
                phase, stage
            )));
        }
    }

    let profile = state.profiles.update(|profile| {
        apply_profile_update(profile, update);
        profile.clone()
    })?;

    tracing::info!(
        stage = ?profile.maternity_stage,
        phase = %profile.current_phase,
        "Profile updated"
    );
    Ok(Json(profile))
}

fn apply_profile_update(profile: &mut UserProfile, update: ProfileUpdate) {
    if let Some(name) = update.name {
        profile.name = name.trim().to_string();
    }
    if let Some(age) = update.age {
        profile.age = age;
    }
    if let Some(date) = update.delivery_date {
        profile.delivery_date = date;
    }
    if let Some(delivery_type) = update.delivery_type {
        profile.delivery_type = delivery_type;
    }
    if let Some(stage) = update.maternity_stage {
        profile.maternity_stage = stage;
        if !stage.admits_phase(profile.current_phase) {
            profile.current_phase = stage.starting_phase();
        }
    }
    if let Some(phase) = update.current_phase {
        profile.current_phase = phase;
    }
    if let Some(history) = update.medical_history {
        profile.medical_history = history;
    }
    if let Some(allergies) = update.allergies {
        profile.allergies = allergies;
    }
    if let Some(contact) = update.emergency_contact {
        profile.emergency_contact = contact;
    }
}

// ─── Journey Settings ────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct SettingsUpdate {
    pub pace: Option<Pace>,
    pub preferred_time: Option<PreferredTime>,
    #[validate(length(max = 10))]
    pub goals: Option<Vec<String>>,
    pub is_paused: Option<bool>,
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(update): Json<SettingsUpdate>,
) -> Result<Json<UserProfile>> {
    update.validate()?;

    let profile = state.profiles.update(|profile| {
        let settings = &mut profile.journey_settings;
        if let Some(pace) = update.pace {
            settings.pace = pace;
        }
        if let Some(time) = update.preferred_time {
            settings.preferred_time = time;
        }
        if let Some(goals) = update.goals {
            settings.goals = goals;
        }
        if let Some(paused) = update.is_paused {
            settings.is_paused = paused;
        }
        profile.clone()
    })?;

    tracing::info!(
        pace = ?profile.journey_settings.pace,
        paused = profile.journey_settings.is_paused,
        "Journey settings updated"
    );
    Ok(Json(profile))
}

// ─── Login ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LoginResponse {
    pub streak_count: u32,
    pub last_login_date: String,
    /// False when this day was already counted
    pub incremented: bool,
}

async fn login(State(state): State<Arc<AppState>>) -> Result<Json<LoginResponse>> {
    let today = today_utc();
    let (incremented, profile) = state.profiles.update(|profile| {
        let incremented = record_login(profile, &today);
        (incremented, profile.clone())
    })?;

    Ok(Json(LoginResponse {
        streak_count: profile.streak_count,
        last_login_date: profile.last_login_date,
        incremented,
    }))
}
