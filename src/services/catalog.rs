// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recovery activity catalog loading and lookup.

use crate::models::{Phase, RecoveryActivity};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// On-disk catalog document.
#[derive(Deserialize)]
struct CatalogFile {
    activities: Vec<RecoveryActivity>,
}

/// Ordered, immutable set of activity definitions.
#[derive(Debug, Default, Clone)]
pub struct ActivityCatalog {
    activities: Vec<RecoveryActivity>,
}

impl ActivityCatalog {
    /// Build a catalog from already-parsed activities, keeping their order.
    pub fn new(activities: Vec<RecoveryActivity>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for activity in &activities {
            if !seen.insert(activity.id.as_str()) {
                return Err(CatalogError::DuplicateId(activity.id.clone()));
            }
            if !(1..=10).contains(&activity.intensity_scale) {
                return Err(CatalogError::InvalidIntensity {
                    id: activity.id.clone(),
                    intensity: activity.intensity_scale,
                });
            }
        }
        Ok(Self { activities })
    }

    /// Load the catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the catalog from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let catalog = Self::new(file.activities)?;
        tracing::info!(count = catalog.activities.len(), "Loaded activity catalog");
        Ok(catalog)
    }

    /// Every activity, in declared order.
    pub fn activities(&self) -> &[RecoveryActivity] {
        &self.activities
    }

    pub fn get(&self, id: &str) -> Option<&RecoveryActivity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Activities tagged with `phase`, in declared order.
    pub fn in_phase(&self, phase: Phase) -> Vec<&RecoveryActivity> {
        self.activities.iter().filter(|a| a.phase == phase).collect()
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Duplicate activity id: {0}")]
    DuplicateId(String),

    #[error("Activity {id} has intensity {intensity}, expected 1-10")]
    InvalidIntensity { id: String, intensity: u8 },
}
