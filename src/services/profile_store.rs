// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile ownership: one writer, save on every mutation, change feed.

use crate::db::{KvStore, StorageError};
use crate::models::UserProfile;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Load/save boundary for the profile snapshot.
pub trait ProfilePersistence: Send + Sync {
    /// The saved profile, or `None` if there is none or it can't be read.
    fn load(&self) -> Option<UserProfile>;
    fn save(&self, profile: &UserProfile) -> Result<(), StorageError>;
}

/// Persists the profile as JSON under one versioned key.
pub struct KvProfilePersistence {
    kv: Arc<dyn KvStore>,
    key: String,
}

impl KvProfilePersistence {
    pub fn new(kv: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }
}

impl ProfilePersistence for KvProfilePersistence {
    fn load(&self) -> Option<UserProfile> {
        let raw = match self.kv.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read saved profile");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Saved profile unreadable, using defaults");
                None
            }
        }
    }

    fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile)?;
        self.kv.set(&self.key, &raw)
    }
}

/// Owner of the single device profile.
pub struct ProfileStore {
    persistence: Arc<dyn ProfilePersistence>,
    current: Mutex<UserProfile>,
    changes: watch::Sender<UserProfile>,
}

impl ProfileStore {
    /// Load the saved profile, falling back to onboarding defaults.
    pub fn open(persistence: Arc<dyn ProfilePersistence>) -> Self {
        let profile = persistence.load().unwrap_or_else(|| {
            tracing::info!("No saved profile, starting from defaults");
            UserProfile::default()
        });
        let (changes, _) = watch::channel(profile.clone());
        Self {
            persistence,
            current: Mutex::new(profile),
            changes,
        }
    }

    /// Snapshot of the current profile.
    pub fn get(&self) -> UserProfile {
        self.changes.borrow().clone()
    }

    /// Apply `mutate` to a copy of the profile.
    ///
    /// If the copy differs, it is saved first and only then published, so a
    /// failed save leaves the store unchanged.
    pub fn update<F, R>(&self, mutate: F) -> Result<R, StorageError>
    where
        F: FnOnce(&mut UserProfile) -> R,
    {
        let mut current = self.current.lock().map_err(|_| StorageError::Poisoned)?;

        let mut next = current.clone();
        let out = mutate(&mut next);

        if next != *current {
            self.persistence.save(&next)?;
            *current = next.clone();
            self.changes.send_replace(next);
        }

        Ok(out)
    }

    /// Receiver that observes every published profile.
    pub fn subscribe(&self) -> watch::Receiver<UserProfile> {
        self.changes.subscribe()
    }
}
