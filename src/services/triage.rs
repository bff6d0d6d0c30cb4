// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! AI triage collaborator.
//!
//! The analyzer is a black box: messages plus profile context in, free-text
//! guidance out. A failing analyzer never fails the caller; it produces an
//! `Unavailable` reply the client can offer to retry.

use crate::models::{DeliveryType, MaternityStage, Phase, UserProfile};
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::time::Duration;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const TRIAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// External analysis function.
pub trait TriageAnalyzer: Send + Sync {
    fn analyze<'a>(
        &'a self,
        messages: &'a [String],
        profile: &'a UserProfile,
    ) -> BoxFuture<'a, Result<String, TriageError>>;
}

/// Used when no analyzer endpoint is configured.
pub struct DisabledTriage;

impl TriageAnalyzer for DisabledTriage {
    fn analyze<'a>(
        &'a self,
        _messages: &'a [String],
        _profile: &'a UserProfile,
    ) -> BoxFuture<'a, Result<String, TriageError>> {
        Box::pin(async { Err(TriageError::NotConfigured) })
    }
}

/// Context sent alongside the conversation. Only what triage needs.
#[derive(Serialize)]
struct TriageContext {
    maternity_stage: MaternityStage,
    delivery_type: DeliveryType,
    current_phase: Phase,
}

#[derive(Serialize)]
struct TriageRequest<'a> {
    messages: &'a [String],
    context: TriageContext,
}

#[derive(Deserialize)]
struct TriageResponse {
    reply: String,
}

/// Posts the conversation to an HTTP analyzer.
pub struct HttpTriageAnalyzer {
    client: reqwest::Client,
    url: String,
}

impl HttpTriageAnalyzer {
    pub fn new(url: impl Into<String>) -> Result<Self, TriageError> {
        let client = reqwest::Client::builder()
            .timeout(TRIAGE_TIMEOUT)
            .build()
            .map_err(|e| TriageError::Http(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl TriageAnalyzer for HttpTriageAnalyzer {
    fn analyze<'a>(
        &'a self,
        messages: &'a [String],
        profile: &'a UserProfile,
    ) -> BoxFuture<'a, Result<String, TriageError>> {
        Box::pin(async move {
            let request = TriageRequest {
                messages,
                context: TriageContext {
                    maternity_stage: profile.maternity_stage,
                    delivery_type: profile.delivery_type,
                    current_phase: profile.current_phase,
                },
            };

            let response = self
                .client
                .post(&self.url)
                .json(&request)
                .send()
                .await
                .map_err(|e| TriageError::Http(e.to_string()))?;

            if !response.status().is_success() {
                return Err(TriageError::Status(response.status().as_u16()));
            }

            let body: TriageResponse = response
                .json()
                .await
                .map_err(|e| TriageError::Decode(e.to_string()))?;
            Ok(body.reply)
        })
    }
}

/// Reply handed back to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TriageReply {
    Answered { content: String },
    Unavailable { retryable: bool },
}

/// Ask the analyzer, absorbing any failure into `Unavailable`.
pub async fn triage(
    analyzer: &dyn TriageAnalyzer,
    messages: &[String],
    profile: &UserProfile,
) -> TriageReply {
    match analyzer.analyze(messages, profile).await {
        Ok(content) => TriageReply::Answered { content },
        Err(e) => {
            tracing::warn!(error = %e, "Triage analysis failed");
            TriageReply::Unavailable {
                retryable: e.is_retryable(),
            }
        }
    }
}

/// Errors from the triage collaborator.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("Triage analyzer not configured")]
    NotConfigured,

    #[error("Triage request failed: {0}")]
    Http(String),

    #[error("Triage analyzer returned status {0}")]
    Status(u16),

    #[error("Failed to decode triage response: {0}")]
    Decode(String),
}

impl TriageError {
    /// Whether asking again could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            TriageError::NotConfigured => false,
            TriageError::Status(code) => *code >= 500 || *code == 429,
            TriageError::Http(_) | TriageError::Decode(_) => true,
        }
    }
}
