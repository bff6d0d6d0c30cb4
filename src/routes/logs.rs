// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health log, period log and clinical report routes.

use crate::error::{AppError, Result};
use crate::models::{HealthLogEntry, NewHealthLog, NewPeriodLog, PeriodLog};
use crate::services::health_log::{recent_period_entries, summarize, HealthSummary};
use crate::services::report::{build_report, export_json};
use crate::services::streak::record_login;
use crate::services::ReportTargets;
use crate::time_utils::today_utc;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Upper bound for `?limit=` on the period view.
const MAX_PERIOD_LIMIT: usize = 100;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/logs", post(create_log))
        .route("/api/logs/summary", get(get_summary))
        .route("/api/logs/period", get(get_recent_period))
        .route(
            "/api/period-logs",
            post(create_period_log).get(get_period_logs),
        )
        .route("/api/report", get(download_report))
}

// ─── Health Logs ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateLogResponse {
    pub entry: HealthLogEntry,
    pub streak_count: u32,
}

/// Append a health log. Saving a log also counts as today's engagement.
///
/// Once the entry is stored the request succeeds; a failed streak save is
/// logged and the previous streak is reported.
async fn create_log(
    State(state): State<Arc<AppState>>,
    Json(new_log): Json<NewHealthLog>,
) -> Result<Json<CreateLogResponse>> {
    new_log.validate()?;

    let entry = state.health_logs.append(new_log, Utc::now())?;

    let today = today_utc();
    let streak_count = match state.profiles.update(|profile| {
        record_login(profile, &today);
        profile.streak_count
    }) {
        Ok(streak_count) => streak_count,
        Err(e) => {
            tracing::warn!(
                entry_id = %entry.id,
                error = %e,
                "Failed to record streak for health log"
            );
            state.profiles.get().streak_count
        }
    };

    Ok(Json(CreateLogResponse {
        entry,
        streak_count,
    }))
}

async fn get_summary(State(state): State<Arc<AppState>>) -> Result<Json<HealthSummary>> {
    let entries = state.health_logs.entries()?;
    let targets = ReportTargets::from(&state.config);
    Ok(Json(summarize(&entries, &targets)))
}

#[derive(Debug, Deserialize)]
struct PeriodQuery {
    limit: Option<usize>,
}

/// Most recent entries that recorded a period flow, oldest first.
async fn get_recent_period(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<HealthLogEntry>>> {
    let limit = query.limit.unwrap_or(state.config.recent_period_limit);
    if limit > MAX_PERIOD_LIMIT {
        return Err(AppError::BadRequest(format!(
            "limit must be at most {}",
            MAX_PERIOD_LIMIT
        )));
    }

    let entries = state.health_logs.entries()?;
    let recent = recent_period_entries(&entries, limit)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(recent))
}

// ─── Period Logs ─────────────────────────────────────────────

async fn create_period_log(
    State(state): State<Arc<AppState>>,
    Json(new_log): Json<NewPeriodLog>,
) -> Result<Json<PeriodLog>> {
    new_log.validate()?;

    let now = Utc::now();
    let log = state.profiles.update(|profile| {
        let log = PeriodLog {
            id: format!(
                "period-{}-{}",
                now.timestamp_millis(),
                profile.period_logs.len()
            ),
            date: new_log.date,
            flow: new_log.flow,
            symptoms: new_log.symptoms,
            mood: new_log.mood,
            notes: new_log.notes,
        };
        profile.period_logs.push(log.clone());
        log
    })?;

    tracing::info!(id = %log.id, date = %log.date, "Period log appended");
    Ok(Json(log))
}

async fn get_period_logs(State(state): State<Arc<AppState>>) -> Json<Vec<PeriodLog>> {
    Json(state.profiles.get().period_logs)
}

// ─── Clinical Report ─────────────────────────────────────────

/// Download the clinical report over the full log history.
async fn download_report(State(state): State<Arc<AppState>>) -> Result<Response> {
    let profile = state.profiles.get();
    let entries = state.health_logs.entries()?;
    let targets = ReportTargets::from(&state.config);

    let report = build_report(&profile, &entries, &targets);
    let document = export_json(&report).map_err(anyhow::Error::from)?;

    tracing::info!(
        filename = %document.filename,
        entries = report.summary.entries,
        "Clinical report exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, document.mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.filename),
            ),
        ],
        document.bytes,
    )
        .into_response())
}
