// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! AfterMa companion: maternal recovery journey core
//!
//! This crate provides the local API behind the companion app: activity
//! eligibility, phase progress, health logging, the clinical report, and the
//! engagement streak.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::KvStore;
use services::{
    ActivityCatalog, HealthLogStore, KvProfilePersistence, ProfileStore, SessionTracker,
    SosButton, TriageAnalyzer,
};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalog: ActivityCatalog,
    pub profiles: ProfileStore,
    pub health_logs: HealthLogStore,
    pub sessions: SessionTracker,
    pub triage: Arc<dyn TriageAnalyzer>,
    pub sos: SosButton,
}

impl AppState {
    /// Open every store on `kv` and assemble the state.
    pub fn new(
        config: Config,
        catalog: ActivityCatalog,
        kv: Arc<dyn KvStore>,
        triage: Arc<dyn TriageAnalyzer>,
    ) -> Self {
        let persistence = Arc::new(KvProfilePersistence::new(
            kv.clone(),
            config.profile_key.clone(),
        ));
        let sos = SosButton::new(config.sos_confirm_window);

        Self {
            profiles: ProfileStore::open(persistence),
            health_logs: HealthLogStore::open(kv.clone()),
            sessions: SessionTracker::open(kv),
            catalog,
            triage,
            sos,
            config,
        }
    }
}
