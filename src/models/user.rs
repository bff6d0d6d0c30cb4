// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model, persisted as one snapshot.

use crate::models::activity::{Phase, PhaseTaxonomy};
use crate::models::health_log::PeriodLog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Top-level maternity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum MaternityStage {
    #[serde(rename = "TTC")]
    TryingToConceive,
    #[serde(rename = "Pregnant-T1")]
    PregnantT1,
    #[serde(rename = "Pregnant-T2")]
    PregnantT2,
    #[serde(rename = "Pregnant-T3")]
    PregnantT3,
    #[serde(rename = "Postpartum")]
    Postpartum,
}

impl MaternityStage {
    /// The single catalog phase a non-postpartum stage shows.
    ///
    /// Postpartum shows every "Month N" phase, so it has no single token.
    pub fn phase_token(self) -> Option<Phase> {
        match self {
            MaternityStage::TryingToConceive => Some(Phase::PreConception),
            MaternityStage::PregnantT1 => Some(Phase::Trimester1),
            MaternityStage::PregnantT2 => Some(Phase::Trimester2),
            MaternityStage::PregnantT3 => Some(Phase::Trimester3),
            MaternityStage::Postpartum => None,
        }
    }

    pub fn taxonomy(self) -> PhaseTaxonomy {
        match self {
            MaternityStage::TryingToConceive => PhaseTaxonomy::Conception,
            MaternityStage::PregnantT1
            | MaternityStage::PregnantT2
            | MaternityStage::PregnantT3 => PhaseTaxonomy::Pregnancy,
            MaternityStage::Postpartum => PhaseTaxonomy::Postpartum,
        }
    }

    /// Phase a profile starts at when it enters this stage.
    pub fn starting_phase(self) -> Phase {
        self.phase_token().unwrap_or(Phase::Month1)
    }

    /// Whether `phase` can be the unlock frontier of a profile in this stage.
    ///
    /// Single-phase stages admit only their own token; postpartum admits any
    /// "Month N" phase.
    pub fn admits_phase(self, phase: Phase) -> bool {
        match self.phase_token() {
            Some(token) => phase == token,
            None => phase.taxonomy() == self.taxonomy(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum DeliveryType {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "c-section")]
    CSection,
    #[serde(rename = "pending")]
    Pending,
}

/// User-selected intensity preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Gentle,
    Moderate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTime {
    Morning,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct JourneySettings {
    pub pace: Pace,
    pub preferred_time: PreferredTime,
    #[serde(default)]
    pub goals: Vec<String>,
    /// Blocks new session starts while set
    #[serde(default)]
    pub is_paused: bool,
}

impl Default for JourneySettings {
    fn default() -> Self {
        Self {
            pace: Pace::Gentle,
            preferred_time: PreferredTime::Morning,
            goals: vec!["improve strength".to_string(), "stabilize mood".to_string()],
            is_paused: false,
        }
    }
}

/// Root aggregate. One per device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    /// Delivery date or due date (YYYY-MM-DD)
    pub delivery_date: String,
    pub delivery_type: DeliveryType,
    pub maternity_stage: MaternityStage,
    /// Unlock frontier
    pub current_phase: Phase,
    #[serde(default)]
    pub completed_activity_ids: BTreeSet<String>,
    #[serde(default)]
    pub journey_settings: JourneySettings,
    #[serde(default)]
    pub streak_count: u32,
    /// Last engagement day (YYYY-MM-DD)
    pub last_login_date: String,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub medical_history: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub period_logs: Vec<PeriodLog>,
}

impl UserProfile {
    /// Onboarding defaults, stamped with the given day.
    pub fn new_default(today: &str) -> Self {
        Self {
            name: "Guest".to_string(),
            age: 28,
            delivery_date: today.to_string(),
            delivery_type: DeliveryType::Normal,
            maternity_stage: MaternityStage::Postpartum,
            current_phase: Phase::Month1,
            completed_activity_ids: BTreeSet::new(),
            journey_settings: JourneySettings::default(),
            streak_count: 0,
            last_login_date: today.to_string(),
            badges: Vec::new(),
            medical_history: String::new(),
            allergies: String::new(),
            emergency_contact: String::new(),
            period_logs: Vec::new(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new_default(&crate::time_utils::today_utc())
    }
}
