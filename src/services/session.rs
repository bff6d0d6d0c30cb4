// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Guided session lifecycle.
//!
//! A session is started only when both gates are open (see `progress`).
//! Finishing it records an `ExerciseLog` and marks the activity complete.

use crate::db::{keys, AppendLog, KvStore, StorageError};
use crate::models::{ActiveSession, ExerciseLog, Pace, RecoveryActivity, UserProfile};
use crate::services::progress::{can_start_session, SessionBlock};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Outcome of asking to start a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionStart {
    Started { activity_id: String },
    /// Guarded no-op; nothing changed.
    Ignored { reason: SessionBlock },
}

/// Tracks the one running session and the history of finished ones.
pub struct SessionTracker {
    active: Mutex<Option<ActiveSession>>,
    history: AppendLog<ExerciseLog>,
}

impl SessionTracker {
    pub fn open(kv: Arc<dyn KvStore>) -> Self {
        Self {
            active: Mutex::new(None),
            history: AppendLog::open(kv, keys::EXERCISE_LOGS),
        }
    }

    /// Start `activity` unless the journey is paused or its phase is locked.
    ///
    /// Starting replaces any session already running.
    pub fn start(
        &self,
        profile: &UserProfile,
        activity: &RecoveryActivity,
        now: DateTime<Utc>,
    ) -> Result<SessionStart, StorageError> {
        if let Err(reason) = can_start_session(profile, activity) {
            tracing::debug!(activity_id = %activity.id, ?reason, "Session start ignored");
            return Ok(SessionStart::Ignored { reason });
        }

        let mut active = self.active.lock().map_err(|_| StorageError::Poisoned)?;
        if let Some(previous) = active.replace(ActiveSession {
            activity_id: activity.id.clone(),
            started_at: now,
        }) {
            tracing::info!(activity_id = %previous.activity_id, "Abandoned running session");
        }

        tracing::info!(activity_id = %activity.id, "Session started");
        Ok(SessionStart::Started {
            activity_id: activity.id.clone(),
        })
    }

    /// The running session, if any.
    pub fn active(&self) -> Option<ActiveSession> {
        self.active.lock().ok().and_then(|a| a.clone())
    }

    /// Finish the running session and record it.
    ///
    /// Returns `None` when no session is running.
    pub fn finish(
        &self,
        pace: Pace,
        now: DateTime<Utc>,
    ) -> Result<Option<ExerciseLog>, StorageError> {
        let mut active = self.active.lock().map_err(|_| StorageError::Poisoned)?;
        let Some(session) = active.take() else {
            return Ok(None);
        };

        let elapsed = now.signed_duration_since(session.started_at);
        let duration_minutes = u32::try_from(elapsed.num_minutes().max(0)).unwrap_or(u32::MAX);

        let log = self.history.append_with(|seq| ExerciseLog {
            id: format!("session-{}-{}", now.timestamp_millis(), seq),
            activity_id: session.activity_id.clone(),
            duration_minutes,
            intensity: pace,
            timestamp: now,
            completed: true,
        })?;

        tracing::info!(
            activity_id = %log.activity_id,
            duration_minutes,
            "Session completed"
        );
        Ok(Some(log))
    }

    /// Every finished session, oldest first.
    pub fn history(&self) -> Result<Vec<ExerciseLog>, StorageError> {
        self.history.snapshot()
    }
}
