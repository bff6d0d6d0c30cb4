// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Guided session records.

use crate::models::user::Pace;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A completed guided session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ExerciseLog {
    pub id: String,
    pub activity_id: String,
    /// Whole minutes spent, rounded down
    pub duration_minutes: u32,
    /// Pace the profile was set to during the session
    pub intensity: Pace,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub timestamp: DateTime<Utc>,
    pub completed: bool,
}

/// A session that has been started but not finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSession {
    pub activity_id: String,
    pub started_at: DateTime<Utc>,
}
