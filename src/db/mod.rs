// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence layer (local key-value store).

pub mod journal;
pub mod kv;

pub use journal::AppendLog;
pub use kv::{FileKvStore, KvStore, MemoryKvStore, StorageError};

/// Storage keys. Versioned so a schema change never parses an old blob.
pub mod keys {
    /// Health log entries
    pub const HEALTH_LOGS: &str = "afterma_health_logs_v1";
    /// Completed guided sessions
    pub const EXERCISE_LOGS: &str = "afterma_exercise_logs_v1";
}
