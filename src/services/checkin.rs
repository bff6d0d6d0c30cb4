// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ten-question emotional check-in (EPDS-style).
//!
//! The total is descriptive only. It is logged with the check-in and not
//! interpreted.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const QUESTION_COUNT: usize = 10;
pub const MAX_ANSWER_POINTS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CheckinResult {
    pub total: u32,
    pub answered: u32,
    pub message: String,
}

/// Tally a complete set of answers.
pub fn score(answers: &[u8]) -> Result<CheckinResult, CheckinError> {
    if answers.len() != QUESTION_COUNT {
        return Err(CheckinError::WrongCount(answers.len()));
    }
    if let Some((idx, points)) = answers
        .iter()
        .enumerate()
        .find(|(_, p)| **p > MAX_ANSWER_POINTS)
    {
        return Err(CheckinError::AnswerOutOfRange {
            question: idx + 1,
            points: *points,
        });
    }

    let total = answers.iter().map(|p| u32::from(*p)).sum();
    Ok(CheckinResult {
        total,
        answered: QUESTION_COUNT as u32,
        message: "Healing check-in complete. Your emotional state is logged with care for your steady progress."
            .to_string(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum CheckinError {
    #[error("Expected {QUESTION_COUNT} answers, got {0}")]
    WrongCount(usize),

    #[error("Answer to question {question} is {points}, expected 0-{MAX_ANSWER_POINTS}")]
    AnswerOutOfRange { question: usize, points: u8 },
}
