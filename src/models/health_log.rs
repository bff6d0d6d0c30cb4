// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily health log and dated period log records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Menstrual flow intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Flow {
    None,
    Spotting,
    Light,
    Medium,
    Heavy,
}

/// Stored health log entry. Created once, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HealthLogEntry {
    pub id: String,
    /// Creation time of the entry
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub timestamp: DateTime<Utc>,
    pub pain_level: u8,
    pub energy_level: u8,
    pub mood_level: u8,
    pub sleep_hours: f64,
    pub water_intake: f64,
    pub medications_taken: bool,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub kegel_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_flow: Option<Flow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_ovulating: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cramps_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HealthLogEntry {
    /// True when the entry records actual bleeding.
    pub fn has_period_flow(&self) -> bool {
        matches!(self.period_flow, Some(flow) if flow != Flow::None)
    }
}

/// Health log submission, validated before it is appended.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewHealthLog {
    #[validate(range(max = 10))]
    pub pain_level: u8,
    #[validate(range(max = 10))]
    pub energy_level: u8,
    #[validate(range(max = 10))]
    pub mood_level: u8,
    #[validate(range(min = 0.0, max = 24.0))]
    pub sleep_hours: f64,
    #[validate(range(min = 0.0, max = 50.0))]
    pub water_intake: f64,
    #[serde(default)]
    pub medications_taken: bool,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub kegel_count: u32,
    #[serde(default)]
    pub period_flow: Option<Flow>,
    #[serde(default)]
    pub is_ovulating: Option<bool>,
    #[serde(default)]
    #[validate(range(max = 10))]
    pub cramps_level: Option<u8>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Dated period observation kept on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PeriodLog {
    pub id: String,
    /// Observation date chosen by the user
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    pub flow: Flow,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewPeriodLog {
    pub date: NaiveDate,
    pub flow: Flow,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub symptoms: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub mood: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: String,
}
