// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod checkin;
pub mod eligibility;
pub mod fertility;
pub mod health_log;
pub mod profile_store;
pub mod progress;
pub mod report;
pub mod session;
pub mod sos;
pub mod streak;
pub mod triage;

pub use catalog::{ActivityCatalog, CatalogError};
pub use health_log::{HealthLogStore, ReportTargets};
pub use profile_store::{KvProfilePersistence, ProfilePersistence, ProfileStore};
pub use session::SessionTracker;
pub use sos::SosButton;
pub use triage::{DisabledTriage, HttpTriageAnalyzer, TriageAnalyzer};
