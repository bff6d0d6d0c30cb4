// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! AfterMa Companion API Server
//!
//! Serves the single local profile's recovery journey, health logs and
//! clinical report to the companion frontend.

use afterma_companion::{
    config::Config,
    db::{FileKvStore, KvStore, MemoryKvStore},
    services::{ActivityCatalog, DisabledTriage, HttpTriageAnalyzer, TriageAnalyzer},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting AfterMa companion API");

    // Load recovery activity catalog
    tracing::info!(path = %config.catalog_path.display(), "Loading activity catalog");
    let catalog = ActivityCatalog::load_from_file(&config.catalog_path)?;

    // Local key-value store
    let kv: Arc<dyn KvStore> = match &config.data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Using file-backed store");
            Arc::new(FileKvStore::open(dir)?)
        }
        None => {
            tracing::warn!("DATA_DIR not set, profile and logs will not survive a restart");
            Arc::new(MemoryKvStore::new())
        }
    };

    let triage: Arc<dyn TriageAnalyzer> = match &config.triage_url {
        Some(url) => {
            tracing::info!(url = %url, "Triage analyzer configured");
            Arc::new(HttpTriageAnalyzer::new(url.clone())?)
        }
        None => Arc::new(DisabledTriage),
    };

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), catalog, kv, triage));
    spawn_profile_observer(&state);

    // Build router
    let app = afterma_companion::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Log every published profile change.
fn spawn_profile_observer(state: &Arc<AppState>) {
    let mut changes = state.profiles.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let profile = changes.borrow_and_update().clone();
            tracing::debug!(
                stage = ?profile.maternity_stage,
                phase = %profile.current_phase,
                completed = profile.completed_activity_ids.len(),
                streak = profile.streak_count,
                "Profile updated"
            );
        }
    });
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in ["afterma_companion=debug", "info"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry().with(filter).with(format).init();
}
