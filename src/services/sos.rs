// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SOS double-tap confirmation.
//!
//! The first tap arms the button and schedules a disarm after the
//! confirmation window. A second tap while armed triggers SOS and cancels
//! the pending disarm. Requires a running tokio runtime.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum SosTap {
    /// Waiting for the confirming tap
    Armed,
    /// Confirmed; the emergency flow should open
    Triggered,
}

#[derive(Default)]
struct SosState {
    armed: bool,
    /// Bumped on every arm so a stale timer can't disarm a newer arm.
    generation: u64,
    disarm: Option<JoinHandle<()>>,
}

pub struct SosButton {
    window: Duration,
    state: Arc<Mutex<SosState>>,
}

impl SosButton {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: Arc::new(Mutex::new(SosState::default())),
        }
    }

    pub fn tap(&self) -> SosTap {
        let mut state = lock(&self.state);

        if state.armed {
            state.armed = false;
            if let Some(timer) = state.disarm.take() {
                timer.abort();
            }
            tracing::warn!("SOS confirmed");
            return SosTap::Triggered;
        }

        state.armed = true;
        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;
        let shared = Arc::clone(&self.state);
        let window = self.window;

        state.disarm = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let mut state = lock(&shared);
            if state.generation == generation {
                state.armed = false;
                state.disarm = None;
                tracing::debug!("SOS confirmation window expired");
            }
        }));

        tracing::info!(window_ms = window.as_millis() as u64, "SOS armed");
        SosTap::Armed
    }

    pub fn is_armed(&self) -> bool {
        lock(&self.state).armed
    }

    /// Drop back to idle without triggering.
    pub fn cancel(&self) {
        let mut state = lock(&self.state);
        state.armed = false;
        if let Some(timer) = state.disarm.take() {
            timer.abort();
        }
    }
}

impl Drop for SosButton {
    fn drop(&mut self) {
        self.cancel();
    }
}

// A panic while holding the lock can't leave the flags inconsistent.
fn lock(state: &Mutex<SosState>) -> MutexGuard<'_, SosState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
