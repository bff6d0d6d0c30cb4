// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Append-only health log and the aggregates reports are built from.
//!
//! Every aggregate is defined on an empty collection (0, or 0%), never NaN.

use crate::db::{keys, AppendLog, KvStore, StorageError};
use crate::models::{HealthLogEntry, NewHealthLog};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Health log store. Entries are appended and never updated or removed.
pub struct HealthLogStore {
    log: AppendLog<HealthLogEntry>,
}

impl HealthLogStore {
    pub fn open(kv: Arc<dyn KvStore>) -> Self {
        Self {
            log: AppendLog::open(kv, keys::HEALTH_LOGS),
        }
    }

    /// Append a submission stamped with its creation time.
    pub fn append(
        &self,
        new: NewHealthLog,
        now: DateTime<Utc>,
    ) -> Result<HealthLogEntry, StorageError> {
        let entry = self.log.append_with(|seq| HealthLogEntry {
            id: format!("log-{}-{}", now.timestamp_millis(), seq),
            timestamp: now,
            pain_level: new.pain_level,
            energy_level: new.energy_level,
            mood_level: new.mood_level,
            sleep_hours: new.sleep_hours,
            water_intake: new.water_intake,
            medications_taken: new.medications_taken,
            symptoms: new.symptoms,
            kegel_count: new.kegel_count,
            period_flow: new.period_flow,
            is_ovulating: new.is_ovulating,
            cramps_level: new.cramps_level,
            notes: new.notes,
        })?;

        tracing::info!(id = %entry.id, "Health log appended");
        Ok(entry)
    }

    /// All entries in creation order.
    pub fn entries(&self) -> Result<Vec<HealthLogEntry>, StorageError> {
        self.log.snapshot()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

/// Numeric fields that can be aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Pain,
    Energy,
    Mood,
    SleepHours,
    WaterIntake,
    KegelCount,
}

impl Metric {
    pub fn value(self, entry: &HealthLogEntry) -> f64 {
        match self {
            Metric::Pain => f64::from(entry.pain_level),
            Metric::Energy => f64::from(entry.energy_level),
            Metric::Mood => f64::from(entry.mood_level),
            Metric::SleepHours => entry.sleep_hours,
            Metric::WaterIntake => entry.water_intake,
            Metric::KegelCount => f64::from(entry.kegel_count),
        }
    }
}

/// Fixed targets the ratio aggregates compare against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportTargets {
    pub hydration_units: f64,
    pub sleep_hours: f64,
    pub recent_period_limit: usize,
}

impl Default for ReportTargets {
    fn default() -> Self {
        Self {
            hydration_units: 10.0,
            sleep_hours: 8.0,
            recent_period_limit: 3,
        }
    }
}

impl From<&crate::config::Config> for ReportTargets {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            hydration_units: config.hydration_target_units,
            sleep_hours: config.sleep_target_hours,
            recent_period_limit: config.recent_period_limit,
        }
    }
}

pub fn sum(entries: &[HealthLogEntry], metric: Metric) -> f64 {
    entries.iter().map(|e| metric.value(e)).sum()
}

/// Arithmetic mean; 0 for no entries.
pub fn mean(entries: &[HealthLogEntry], metric: Metric) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    sum(entries, metric) / entries.len() as f64
}

/// Mean as a percentage of `target`; 0 for no entries or a non-positive target.
pub fn ratio_to_target(entries: &[HealthLogEntry], metric: Metric, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    mean(entries, metric) * 100.0 / target
}

/// Every symptom mentioned in any entry, once.
pub fn distinct_symptoms(entries: &[HealthLogEntry]) -> BTreeSet<String> {
    entries
        .iter()
        .flat_map(|e| e.symptoms.iter().cloned())
        .collect()
}

/// Entries with a recorded flow other than "None", oldest first.
pub fn period_entries(entries: &[HealthLogEntry]) -> Vec<&HealthLogEntry> {
    entries.iter().filter(|e| e.has_period_flow()).collect()
}

/// The last `limit` period entries, oldest first.
pub fn recent_period_entries(entries: &[HealthLogEntry], limit: usize) -> Vec<&HealthLogEntry> {
    let all = period_entries(entries);
    let skip = all.len().saturating_sub(limit);
    all.into_iter().skip(skip).collect()
}

/// Aggregates shown on the health summary screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HealthSummary {
    pub entries: u32,
    pub avg_mood: f64,
    pub avg_pain: f64,
    pub avg_energy: f64,
    pub total_kegels: u64,
    /// Mean kegel count per entry
    pub pelvic_index: f64,
    /// Percent of the daily water target
    pub hydration_ratio: f64,
    /// Percent of the nightly sleep target
    pub sleep_ratio: f64,
    pub symptoms: Vec<String>,
}

pub fn summarize(entries: &[HealthLogEntry], targets: &ReportTargets) -> HealthSummary {
    HealthSummary {
        entries: entries.len() as u32,
        avg_mood: mean(entries, Metric::Mood),
        avg_pain: mean(entries, Metric::Pain),
        avg_energy: mean(entries, Metric::Energy),
        total_kegels: sum(entries, Metric::KegelCount) as u64,
        pelvic_index: mean(entries, Metric::KegelCount),
        hydration_ratio: ratio_to_target(entries, Metric::WaterIntake, targets.hydration_units),
        sleep_ratio: ratio_to_target(entries, Metric::SleepHours, targets.sleep_hours),
        symptoms: distinct_symptoms(entries).into_iter().collect(),
    }
}
