// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use afterma_companion::config::Config;
use afterma_companion::config::DEFAULT_PROFILE_KEY;
use afterma_companion::db::{KvStore, MemoryKvStore, StorageError};
use afterma_companion::models::UserProfile;
use afterma_companion::routes::create_router;
use afterma_companion::services::triage::TriageError;
use afterma_companion::services::{ActivityCatalog, DisabledTriage, TriageAnalyzer};
use afterma_companion::AppState;
use axum::body::Body;
use axum::http::{header, Request};
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Load the shipped activity catalog.
#[allow(dead_code)]
pub fn test_catalog() -> ActivityCatalog {
    ActivityCatalog::load_from_file("data/recovery_catalog.json")
        .expect("Failed to load activity catalog - is data/ committed?")
}

/// Analyzer that answers with a canned reply.
#[allow(dead_code)]
pub struct CannedTriage(pub &'static str);

impl TriageAnalyzer for CannedTriage {
    fn analyze<'a>(
        &'a self,
        _messages: &'a [String],
        _profile: &'a UserProfile,
    ) -> BoxFuture<'a, Result<String, TriageError>> {
        let reply = self.0.to_string();
        Box::pin(async move { Ok(reply) })
    }
}

/// Create a test app over an in-memory store with triage disabled.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(Arc::new(MemoryKvStore::new()), Arc::new(DisabledTriage))
}

/// Create a test app over the given store and analyzer.
#[allow(dead_code)]
pub fn create_test_app_with(
    kv: Arc<dyn KvStore>,
    triage: Arc<dyn TriageAnalyzer>,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::default(), test_catalog(), kv, triage));
    (create_router(state.clone()), state)
}

/// In-memory store pre-seeded with a saved profile.
#[allow(dead_code)]
pub fn seeded_store(profile: &UserProfile) -> Arc<dyn KvStore> {
    let kv = MemoryKvStore::new();
    let raw = serde_json::to_string(profile).unwrap();
    kv.set(DEFAULT_PROFILE_KEY, &raw).unwrap();
    Arc::new(kv)
}

/// Store whose profile writes fail. Every other key behaves normally.
#[allow(dead_code)]
#[derive(Default)]
pub struct ReadOnlyProfileStore {
    inner: MemoryKvStore,
}

impl ReadOnlyProfileStore {
    /// Start from an already saved profile.
    #[allow(dead_code)]
    pub fn with_profile(profile: &UserProfile) -> Self {
        let inner = MemoryKvStore::new();
        let raw = serde_json::to_string(profile).unwrap();
        inner.set(DEFAULT_PROFILE_KEY, &raw).unwrap();
        Self { inner }
    }
}

impl KvStore for ReadOnlyProfileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == DEFAULT_PROFILE_KEY {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "profile is read-only",
            )));
        }
        self.inner.set(key, value)
    }
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn send_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
