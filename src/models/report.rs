// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Clinical report document shapes.

use crate::models::health_log::Flow;
use crate::models::user::MaternityStage;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Structured report handed to the download collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ClinicalReport {
    pub patient: String,
    pub stage: MaternityStage,
    pub summary: ReportSummary,
    pub period_logs: Vec<ReportPeriodEntry>,
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ReportSummary {
    /// One decimal place
    pub avg_mood: f64,
    /// One decimal place
    pub avg_pain: f64,
    pub total_kegels: u64,
    /// Whole percent with a `%` suffix, e.g. "80%"
    pub hydration_rate: String,
    /// Whole percent with a `%` suffix
    pub sleep_rate: String,
    pub entries: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ReportPeriodEntry {
    /// YYYY-MM-DD of the log's creation time
    pub date: String,
    pub flow: Flow,
    pub cramps: Option<u8>,
    pub ovulating: Option<bool>,
}
