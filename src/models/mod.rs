// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod exercise;
pub mod health_log;
pub mod report;
pub mod user;

pub use activity::{Category, Phase, PhaseTaxonomy, RecoveryActivity};
pub use exercise::{ActiveSession, ExerciseLog};
pub use health_log::{Flow, HealthLogEntry, NewHealthLog, NewPeriodLog, PeriodLog};
pub use report::{ClinicalReport, ReportPeriodEntry, ReportSummary};
pub use user::{DeliveryType, JourneySettings, MaternityStage, Pace, PreferredTime, UserProfile};
