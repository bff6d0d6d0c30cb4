// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Append-only record collections persisted as one snapshot per key.

use crate::db::kv::{KvStore, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Ordered, append-only collection.
///
/// Writes are serialized by the lock: the snapshot is saved before the new
/// record becomes visible to readers.
pub struct AppendLog<T> {
    kv: Arc<dyn KvStore>,
    key: String,
    entries: RwLock<Vec<T>>,
}

impl<T> AppendLog<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Load the collection stored under `key`.
    ///
    /// A missing or unreadable snapshot starts an empty collection.
    pub fn open(kv: Arc<dyn KvStore>, key: &str) -> Self {
        let entries = match kv.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(key, error = %e, "Discarding unreadable log snapshot");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read log snapshot");
                Vec::new()
            }
        };

        tracing::debug!(key, count = entries.len(), "Loaded append log");

        Self {
            kv,
            key: key.to_string(),
            entries: RwLock::new(entries),
        }
    }

    /// Append a record built from the current length.
    pub fn append_with<F>(&self, build: F) -> Result<T, StorageError>
    where
        F: FnOnce(usize) -> T,
    {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        let record = build(entries.len());

        let mut next = entries.clone();
        next.push(record.clone());
        let raw = serde_json::to_string(&next)?;
        self.kv.set(&self.key, &raw)?;

        *entries = next;
        Ok(record)
    }

    /// Copy of every record in creation order.
    pub fn snapshot(&self) -> Result<Vec<T>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
