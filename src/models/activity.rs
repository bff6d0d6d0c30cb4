// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recovery activity catalog model and phase taxonomy.

use crate::models::user::DeliveryType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A named stage within a recovery timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Phase {
    #[serde(rename = "Month 1")]
    Month1,
    #[serde(rename = "Month 2")]
    Month2,
    #[serde(rename = "Month 3")]
    Month3,
    #[serde(rename = "Month 4+")]
    Month4Plus,
    #[serde(rename = "Trimester 1")]
    Trimester1,
    #[serde(rename = "Trimester 2")]
    Trimester2,
    #[serde(rename = "Trimester 3")]
    Trimester3,
    #[serde(rename = "Pre-conception")]
    PreConception,
}

/// Which ordered phase sequence a phase belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseTaxonomy {
    Postpartum,
    Pregnancy,
    Conception,
}

const POSTPARTUM_PHASES: [Phase; 4] = [
    Phase::Month1,
    Phase::Month2,
    Phase::Month3,
    Phase::Month4Plus,
];
const PREGNANCY_PHASES: [Phase; 3] = [Phase::Trimester1, Phase::Trimester2, Phase::Trimester3];
const CONCEPTION_PHASES: [Phase; 1] = [Phase::PreConception];

impl PhaseTaxonomy {
    /// Phases of this taxonomy in unlock order.
    pub fn phases(self) -> &'static [Phase] {
        match self {
            PhaseTaxonomy::Postpartum => &POSTPARTUM_PHASES,
            PhaseTaxonomy::Pregnancy => &PREGNANCY_PHASES,
            PhaseTaxonomy::Conception => &CONCEPTION_PHASES,
        }
    }
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Month1 => "Month 1",
            Phase::Month2 => "Month 2",
            Phase::Month3 => "Month 3",
            Phase::Month4Plus => "Month 4+",
            Phase::Trimester1 => "Trimester 1",
            Phase::Trimester2 => "Trimester 2",
            Phase::Trimester3 => "Trimester 3",
            Phase::PreConception => "Pre-conception",
        }
    }

    pub fn taxonomy(self) -> PhaseTaxonomy {
        match self {
            Phase::Month1 | Phase::Month2 | Phase::Month3 | Phase::Month4Plus => {
                PhaseTaxonomy::Postpartum
            }
            Phase::Trimester1 | Phase::Trimester2 | Phase::Trimester3 => PhaseTaxonomy::Pregnancy,
            Phase::PreConception => PhaseTaxonomy::Conception,
        }
    }

    /// Position of this phase within its own taxonomy.
    pub fn index(self) -> usize {
        self.taxonomy()
            .phases()
            .iter()
            .position(|p| *p == self)
            .unwrap_or(0)
    }

    /// True for the postpartum "Month N" tokens.
    pub fn is_postpartum_month(self) -> bool {
        self.taxonomy() == PhaseTaxonomy::Postpartum
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = UnknownPhase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Phase::Month1,
            Phase::Month2,
            Phase::Month3,
            Phase::Month4Plus,
            Phase::Trimester1,
            Phase::Trimester2,
            Phase::Trimester3,
            Phase::PreConception,
        ]
        .into_iter()
        .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| UnknownPhase(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown phase: {0}")]
pub struct UnknownPhase(pub String);

/// Activity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Category {
    #[serde(rename = "Physical Recovery")]
    PhysicalRecovery,
    #[serde(rename = "Emotional Stabilization")]
    EmotionalStabilization,
    #[serde(rename = "Strength Building")]
    StrengthBuilding,
    #[serde(rename = "Prenatal Care")]
    PrenatalCare,
    #[serde(rename = "Birth Prep")]
    BirthPrep,
}

/// A catalog entry. Loaded once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecoveryActivity {
    pub id: String,
    pub phase: Phase,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Free-form label, e.g. "Daily" or "3x weekly"
    pub frequency: String,
    pub points: u32,
    /// Delivery type this activity is restricted to (postpartum only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_specific: Option<DeliveryType>,
    /// 1 (gentlest) to 10
    pub intensity_scale: u8,
}
